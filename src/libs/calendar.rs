//! Calendar construction for a requested report range.
//!
//! Every series in a run is keyed by the dates produced here, so the range is
//! always contiguous, ascending and inclusive of both bounds.

use super::error::{ReportError, Result};
use chrono::NaiveDate;

/// Canonical textual form of a [`NaiveDate`] key.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| ReportError::InvalidDateFormat(date_str.to_string()))
}

/// Builds the inclusive list of dates between `start_date` and `end_date`.
///
/// # Errors
///
/// * [`ReportError::InvalidDateFormat`] if either bound is not a calendar date
/// * [`ReportError::InvalidRange`] if `end_date` is before `start_date`
pub fn date_range(start_date: &str, end_date: &str) -> Result<Vec<NaiveDate>> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;
    dates_between(start, end)
}

/// Same as [`date_range`] for already parsed bounds.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    if end < start {
        return Err(ReportError::InvalidRange {
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
        });
    }
    Ok(start.iter_days().take_while(|date| *date <= end).collect())
}
