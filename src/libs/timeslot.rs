//! Checkout timestamp handling and day-part classification.
//!
//! The reservation API reports checkouts in UTC. Business days are counted in
//! Hong Kong time, which is a fixed UTC+8 with no daylight saving.

use super::error::{ReportError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Timelike, Utc};
use std::fmt;

/// Offset of the reporting time zone (Asia/Hong_Kong) in seconds east of UTC.
pub const LOCAL_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// Label used when a checkout cannot be placed in a time slot.
pub const UNKNOWN_SLOT: &str = "Unknown";

const PLAIN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// One of the four fixed day parts a checkout can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Timeslot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Timeslot {
    pub const ALL: [Timeslot; 4] = [Timeslot::Morning, Timeslot::Afternoon, Timeslot::Evening, Timeslot::Night];

    /// Classifies a local hour of day. Intervals are left-inclusive.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => Timeslot::Morning,
            12..=17 => Timeslot::Afternoon,
            18..=23 => Timeslot::Evening,
            _ => Timeslot::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeslot::Morning => "Morning",
            Timeslot::Afternoon => "Afternoon",
            Timeslot::Evening => "Evening",
            Timeslot::Night => "Night",
        }
    }
}

impl fmt::Display for Timeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed reporting time zone.
pub fn local_offset() -> FixedOffset {
    FixedOffset::east_opt(LOCAL_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parses a checkout timestamp into a UTC instant.
///
/// Two shapes are accepted: `YYYY-MM-DD HH:MM:SS` and
/// `YYYY-MM-DDTHH:MM:SS[.fraction]Z`. Both are read as UTC.
pub fn parse_checkout(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    let naive = if let Some(iso) = raw.strip_suffix('Z') {
        if !iso.contains('T') {
            return Err(ReportError::UnparseableTimestamp(raw.to_string()));
        }
        NaiveDateTime::parse_from_str(iso, ISO_FORMAT)
    } else {
        NaiveDateTime::parse_from_str(raw, PLAIN_FORMAT)
    };

    naive.map(|dt| dt.and_utc()).map_err(|_| ReportError::UnparseableTimestamp(raw.to_string()))
}

/// Converts a UTC instant into the reporting time zone.
pub fn to_local(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    instant.with_timezone(&local_offset())
}

/// Parses a raw checkout and converts it to local time in one step.
pub fn local_checkout(raw: Option<&str>) -> Result<DateTime<FixedOffset>> {
    let raw = raw.ok_or_else(|| ReportError::UnparseableTimestamp(String::new()))?;
    parse_checkout(raw).map(to_local)
}

/// Resolves the day part of a raw checkout timestamp, if it can be parsed.
pub fn checkout_slot(raw: Option<&str>) -> Option<Timeslot> {
    local_checkout(raw).ok().map(|local| Timeslot::from_hour(local.hour()))
}
