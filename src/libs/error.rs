use thiserror::Error;

/// Errors raised by the report pipeline.
///
/// Only the input variants abort a run. API failures are absorbed by the
/// fetcher and timestamp failures skip a single reservation.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Invalid date range: end date {end} is before start date {start}")]
    InvalidRange { start: String, end: String },

    #[error("Unparseable timestamp: '{0}'")]
    UnparseableTimestamp(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
