//! Daily metric series and their normalization onto a calendar.
//!
//! A [`MetricSeries`] always holds exactly one value per calendar date. Source
//! rows are projected onto the calendar and every date without a row is
//! zero-filled. When reservation derivation is enabled and the aggregate
//! endpoint returned nothing, the series are rebuilt from itemized
//! reservations using a flat per-booking estimate.

use crate::api::models::{MetricRows, ReservationRecord};
use crate::libs::calendar::DATE_FORMAT;
use crate::libs::messages::Message;
use crate::libs::timeslot::local_checkout;
use crate::msg_debug;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::AddAssign;

/// Numeric value that can live in a [`MetricSeries`].
pub trait MetricValue: Copy + Default + PartialOrd + AddAssign {
    fn as_f64(self) -> f64;
}

impl MetricValue for f64 {
    fn as_f64(self) -> f64 {
        self
    }
}

impl MetricValue for u64 {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

/// Date-ordered values of one metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetricSeries<T> {
    values: BTreeMap<NaiveDate, T>,
}

impl<T: MetricValue> MetricSeries<T> {
    /// A series holding zero for every date of `calendar`.
    pub fn zeroed(calendar: &[NaiveDate]) -> Self {
        Self {
            values: calendar.iter().map(|date| (*date, T::default())).collect(),
        }
    }

    pub fn set(&mut self, date: NaiveDate, value: T) {
        self.values.insert(date, value);
    }

    /// Adds to an existing date. Dates outside the series are ignored.
    pub fn add(&mut self, date: NaiveDate, value: T) -> bool {
        match self.values.get_mut(&date) {
            Some(current) => {
                *current += value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, date: &NaiveDate) -> Option<T> {
        self.values.get(date).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(date, value)` pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, T)> + '_ {
        self.values.iter().map(|(date, value)| (*date, *value))
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.values.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.values.values().copied()
    }
}

impl<T: MetricValue> FromIterator<(NaiveDate, T)> for MetricSeries<T> {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, T)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Flat per-booking amounts used when series are derived from reservations.
///
/// These are placeholders rather than a revenue model: derived totals are
/// estimates and are labelled as such in every output.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct EstimationPolicy {
    pub gmv_per_booking: f64,
    pub gross_per_booking: f64,
}

impl Default for EstimationPolicy {
    fn default() -> Self {
        Self {
            gmv_per_booking: 1500.0,
            gross_per_booking: 1200.0,
        }
    }
}

/// How the series of a [`DailySeries`] were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOrigin {
    /// Projected from the aggregate endpoint (possibly all zero).
    Reported,
    /// Estimated from itemized reservations.
    Derived,
}

/// The three daily series of a report, keyed by the same calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    pub gmv: MetricSeries<f64>,
    pub gross_revenue: MetricSeries<f64>,
    pub booking_count: MetricSeries<u64>,
    pub origin: SeriesOrigin,
}

impl DailySeries {
    pub fn zeroed(calendar: &[NaiveDate]) -> Self {
        Self {
            gmv: MetricSeries::zeroed(calendar),
            gross_revenue: MetricSeries::zeroed(calendar),
            booking_count: MetricSeries::zeroed(calendar),
            origin: SeriesOrigin::Reported,
        }
    }

    pub fn is_estimated(&self) -> bool {
        self.origin == SeriesOrigin::Derived
    }
}

/// Merges source data onto a calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesNormalizer {
    derive_from_reservations: bool,
    policy: EstimationPolicy,
}

impl SeriesNormalizer {
    pub fn new(derive_from_reservations: bool, policy: EstimationPolicy) -> Self {
        Self {
            derive_from_reservations,
            policy,
        }
    }

    /// Normalizer that only zero-fills aggregate rows.
    pub fn reported_only() -> Self {
        Self::new(false, EstimationPolicy::default())
    }

    /// Produces the three series for `calendar`.
    ///
    /// Rows for dates outside the calendar are ignored. Reservations are only
    /// consulted when derivation is enabled, `rows` is empty and at least one
    /// reservation is present.
    pub fn normalize(&self, calendar: &[NaiveDate], rows: &MetricRows, reservations: &[ReservationRecord]) -> DailySeries {
        if self.derive_from_reservations && rows.is_empty() && !reservations.is_empty() {
            return self.derive(calendar, reservations);
        }

        let mut series = DailySeries::zeroed(calendar);
        for date in calendar {
            let key = date.format(DATE_FORMAT).to_string();
            if let Some(row) = rows.get(&key) {
                series.gmv.set(*date, row.total_book_price);
                series.gross_revenue.set(*date, row.gross);
                series.booking_count.set(*date, row.no_of_booking);
            }
        }
        series
    }

    fn derive(&self, calendar: &[NaiveDate], reservations: &[ReservationRecord]) -> DailySeries {
        let mut series = DailySeries::zeroed(calendar);
        series.origin = SeriesOrigin::Derived;

        for reservation in reservations {
            let local = match local_checkout(reservation.checkout_time.as_deref()) {
                Ok(local) => local,
                Err(e) => {
                    msg_debug!(Message::ReservationSkipped(e.to_string()));
                    continue;
                }
            };

            let date = local.date_naive();
            if series.booking_count.add(date, 1) {
                series.gmv.add(date, self.policy.gmv_per_booking);
                series.gross_revenue.add(date, self.policy.gross_per_booking);
            } else {
                msg_debug!(Message::ReservationOutOfRange(date.format(DATE_FORMAT).to_string()));
            }
        }
        series
    }
}
