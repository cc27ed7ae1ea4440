//! Typed payloads of the reporting API.
//!
//! The upstream service is loose about types: numbers sometimes arrive as
//! strings and fields may be missing or `null`. Everything is normalized here
//! so the rest of the crate only sees defaulted, typed values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One day of aggregate metrics as reported by the metrics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMetricRow {
    /// Gross merchandise value for the day.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_book_price: f64,
    /// Gross revenue for the day.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub gross: f64,
    /// Number of bookings for the day.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub no_of_booking: u64,
}

/// Raw rows keyed by the date string the API returned.
pub type MetricRows = BTreeMap<String, RawMetricRow>;

/// Property metadata from the hotel-info endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelInfo {
    #[serde(default, alias = "hotel_name", deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, alias = "cancelled_bookings", alias = "no_of_cancelled", deserialize_with = "lenient_u64")]
    pub cancelled_count: u64,
    #[serde(default, alias = "notification_emails", alias = "email_list", deserialize_with = "lenient_strings")]
    pub emails: Vec<String>,
}

/// A single itemized booking from the reservation-detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReservationRecord {
    /// Room type or venue the booking was made for.
    #[serde(default, alias = "room_name", alias = "venue", alias = "room", deserialize_with = "lenient_opt_string")]
    pub room_type: Option<String>,
    /// Checkout instant in UTC, as sent by the API.
    #[serde(default, alias = "check_out", alias = "checkout", deserialize_with = "lenient_opt_string")]
    pub checkout_time: Option<String>,
}

impl ReservationRecord {
    pub fn new(room_type: &str, checkout_time: Option<&str>) -> Self {
        Self {
            room_type: Some(room_type.to_string()),
            checkout_time: checkout_time.map(str::to_string),
        }
    }

    /// Room label used for grouping, `Unknown` when the API omitted it.
    pub fn room_label(&self) -> &str {
        match self.room_type.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label,
            _ => crate::libs::timeslot::UNKNOWN_SLOT,
        }
    }
}

/// The reservation endpoint returns either a bare list or `{ "reservations": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ReservationPayload {
    List(Vec<ReservationRecord>),
    Wrapped {
        #[serde(alias = "reservation_details", alias = "data")]
        reservations: Vec<ReservationRecord>,
    },
}

impl ReservationPayload {
    pub(crate) fn into_records(self) -> Vec<ReservationRecord> {
        match self {
            ReservationPayload::List(records) => records,
            ReservationPayload::Wrapped { reservations } => reservations,
        }
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value).filter(|n| n.is_finite()).unwrap_or(0.0))
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let count = match &value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        other => number_of(other).map(|f| f.max(0.0) as u64),
    };
    Ok(count.unwrap_or(0))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().filter_map(|item| item.as_str().map(str::to_string)).collect(),
        Value::String(s) => s.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect(),
        _ => Vec::new(),
    })
}
