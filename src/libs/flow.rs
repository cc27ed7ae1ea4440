//! Room type to checkout time-slot frequencies.
//!
//! Feeds the flow diagram of the detailed report. Every reservation is
//! counted; one whose checkout cannot be resolved lands in the `Unknown` slot.

use crate::api::models::ReservationRecord;
use crate::libs::timeslot::{checkout_slot, Timeslot, UNKNOWN_SLOT};
use std::collections::BTreeMap;

/// Frequency table keyed by room label and by (room label, slot label).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowTable {
    pub by_room: BTreeMap<String, u64>,
    pub by_room_slot: BTreeMap<(String, String), u64>,
}

impl FlowTable {
    pub fn from_reservations(reservations: &[ReservationRecord]) -> Self {
        let mut table = Self::default();
        for reservation in reservations {
            let slot = checkout_slot(reservation.checkout_time.as_deref());
            table.record(reservation.room_label(), slot);
        }
        table
    }

    pub fn record(&mut self, room: &str, slot: Option<Timeslot>) {
        let slot = slot.map(|s| s.label()).unwrap_or(UNKNOWN_SLOT);
        *self.by_room.entry(room.to_string()).or_default() += 1;
        *self.by_room_slot.entry((room.to_string(), slot.to_string())).or_default() += 1;
    }

    pub fn total(&self) -> u64 {
        self.by_room.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_room.is_empty()
    }

    /// Totals per slot label, in day order with `Unknown` last.
    pub fn by_slot(&self) -> Vec<(String, u64)> {
        let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
        for ((_, slot), count) in &self.by_room_slot {
            *totals.entry(slot.as_str()).or_default() += count;
        }

        let mut ordered: Vec<(String, u64)> = Timeslot::ALL
            .iter()
            .filter_map(|slot| totals.remove(slot.label()).map(|count| (slot.label().to_string(), count)))
            .collect();
        ordered.extend(totals.into_iter().map(|(slot, count)| (slot.to_string(), count)));
        ordered
    }

    pub fn count(&self, room: &str, slot: &str) -> u64 {
        self.by_room_slot.get(&(room.to_string(), slot.to_string())).copied().unwrap_or(0)
    }
}
