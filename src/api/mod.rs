//! Client side of the reporting API.
//!
//! All endpoints share the same keying (property id plus an inclusive date
//! range) and the same response envelope. Each call is independent and
//! read-only; a failed call degrades to an empty result instead of aborting
//! the run.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dailyrep::api::{MetricsSource, RangeQuery, ReportApi, ReportApiConfig};
//! use chrono::NaiveDate;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let api = ReportApi::new(&ReportApiConfig::default())?;
//! let query = RangeQuery::new("123", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
//! let rows = api.daily_metrics(&query).await;
//! # Ok(())
//! # }
//! ```

use crate::libs::calendar::DATE_FORMAT;
use chrono::NaiveDate;

pub mod models;
pub mod report_api;

pub use models::{HotelInfo, MetricRows, RawMetricRow, ReservationRecord};
pub use report_api::{ReportApi, ReportApiConfig};

/// Request key shared by every reporting endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeQuery {
    pub space_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RangeQuery {
    pub fn new(space_id: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            space_id: space_id.to_string(),
            start,
            end,
        }
    }

    /// Query-string pairs in the form the API expects.
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("space_id", self.space_id.clone()),
            ("start_date", self.start.format(DATE_FORMAT).to_string()),
            ("end_date", self.end.format(DATE_FORMAT).to_string()),
        ]
    }
}

/// Source of raw report data.
///
/// Implementations never fail: transport or payload problems are logged and
/// surface as an empty result for that call.
#[allow(async_fn_in_trait)]
pub trait MetricsSource {
    /// Per-date aggregate rows. Dates without data are simply absent.
    async fn daily_metrics(&self, query: &RangeQuery) -> MetricRows;

    /// Property metadata, `None` when unavailable.
    async fn hotel_info(&self, query: &RangeQuery) -> Option<HotelInfo>;

    /// Itemized reservations for the range.
    async fn reservations(&self, query: &RangeQuery) -> Vec<ReservationRecord>;
}
