use crate::libs::series::{MetricSeries, MetricValue};

/// Aggregate statistics of one metric series.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SummaryStat {
    pub total: f64,
    /// Mean over every calendar date, zero-filled days included.
    pub average: f64,
    pub max: f64,
    pub min: f64,
    /// Number of dates with a strictly positive value.
    pub days_with_data: usize,
}

pub trait SummaryCalculator {
    fn summarize(&self) -> SummaryStat;
}

impl<T: MetricValue> SummaryCalculator for MetricSeries<T> {
    fn summarize(&self) -> SummaryStat {
        if self.is_empty() {
            return SummaryStat::default();
        }

        let values: Vec<f64> = self.values().map(MetricValue::as_f64).collect();
        let total: f64 = values.iter().sum();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let days_with_data = values.iter().filter(|v| **v > 0.0).count();

        SummaryStat {
            total,
            average: total / values.len() as f64,
            max,
            min,
            days_with_data,
        }
    }
}
