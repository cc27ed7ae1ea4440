//! Report assembly.
//!
//! A [`Report`] is built once per run from the normalized series and handed
//! unchanged to the console, JSON and PDF adapters.

use crate::api::models::{HotelInfo, ReservationRecord};
use crate::libs::flow::FlowTable;
use crate::libs::series::{DailySeries, MetricSeries};
use crate::libs::summary::{SummaryCalculator, SummaryStat};
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The three reported metrics, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Gmv,
    GrossRevenue,
    BookingCount,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Gmv, Metric::GrossRevenue, Metric::BookingCount];

    /// Stable field name used in the JSON snapshot.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Gmv => "daily_gmv",
            Metric::GrossRevenue => "daily_gross_revenue",
            Metric::BookingCount => "daily_booking_count",
        }
    }

    /// Title-cased field name, e.g. `Daily Gross Revenue`.
    pub fn label(&self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn chart_title(&self) -> &'static str {
        match self {
            Metric::Gmv => "Daily GMV (Total Book Price)",
            Metric::GrossRevenue => "Daily Gross Revenue",
            Metric::BookingCount => "Daily Booking Count",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Metric::Gmv | Metric::GrossRevenue => "Amount ($)",
            Metric::BookingCount => "Number of Bookings",
        }
    }

    pub fn is_money(&self) -> bool {
        !matches!(self, Metric::BookingCount)
    }
}

/// Identifies what a report was generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportScope {
    pub space_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Summary statistics of all three series.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportSummary {
    pub gmv: SummaryStat,
    pub gross_revenue: SummaryStat,
    pub booking_count: SummaryStat,
}

impl ReportSummary {
    pub fn get(&self, metric: Metric) -> &SummaryStat {
        match metric {
            Metric::Gmv => &self.gmv,
            Metric::GrossRevenue => &self.gross_revenue,
            Metric::BookingCount => &self.booking_count,
        }
    }
}

/// Fully assembled result of one run.
///
/// Serializes to the JSON snapshot: the three daily series, plus
/// `hotel_info` (possibly `null`) and `reservation_details` when detailed.
#[derive(Debug, Clone)]
pub struct Report {
    pub scope: ReportScope,
    pub gmv: MetricSeries<f64>,
    pub gross_revenue: MetricSeries<f64>,
    pub booking_count: MetricSeries<u64>,
    pub hotel_info: Option<HotelInfo>,
    pub reservation_details: Option<Vec<ReservationRecord>>,
    pub summary: ReportSummary,
    pub flow: Option<FlowTable>,
    pub estimated: bool,
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.is_detailed() { 5 } else { 3 };
        let mut state = serializer.serialize_struct("Report", fields)?;
        state.serialize_field(Metric::Gmv.key(), &self.gmv)?;
        state.serialize_field(Metric::GrossRevenue.key(), &self.gross_revenue)?;
        state.serialize_field(Metric::BookingCount.key(), &self.booking_count)?;
        match &self.reservation_details {
            Some(reservations) => {
                state.serialize_field("hotel_info", &self.hotel_info)?;
                state.serialize_field("reservation_details", reservations)?;
            }
            None => {
                state.skip_field("hotel_info")?;
                state.skip_field("reservation_details")?;
            }
        }
        state.end()
    }
}

impl Report {
    /// Assembles a report. Passing `reservations` switches on the detailed
    /// sections (reservation list and flow table).
    pub fn assemble(
        scope: ReportScope,
        series: DailySeries,
        hotel_info: Option<HotelInfo>,
        reservations: Option<Vec<ReservationRecord>>,
    ) -> Self {
        let summary = ReportSummary {
            gmv: series.gmv.summarize(),
            gross_revenue: series.gross_revenue.summarize(),
            booking_count: series.booking_count.summarize(),
        };
        let flow = reservations.as_deref().map(FlowTable::from_reservations);

        Self {
            scope,
            estimated: series.is_estimated(),
            gmv: series.gmv,
            gross_revenue: series.gross_revenue,
            booking_count: series.booking_count,
            hotel_info,
            reservation_details: reservations,
            summary,
            flow,
        }
    }

    pub fn is_detailed(&self) -> bool {
        self.reservation_details.is_some()
    }

    /// Values of `metric` as floats in calendar order, for charting.
    pub fn series_points(&self, metric: Metric) -> Vec<(NaiveDate, f64)> {
        match metric {
            Metric::Gmv => self.gmv.iter().collect(),
            Metric::GrossRevenue => self.gross_revenue.iter().collect(),
            Metric::BookingCount => self.booking_count.iter().map(|(date, v)| (date, v as f64)).collect(),
        }
    }
}
