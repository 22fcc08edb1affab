use std::collections::HashSet;

use serde::Serialize;

use crate::store::StoreData;

/// The fixed daily session start times, in presentation order.
pub const DAILY_SLOTS: [&str; 6] = ["08:00", "10:00", "12:00", "14:00", "16:00", "18:00"];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SlotStatus {
    pub time: String,
    pub is_available: bool,
}

/// Availability for every fixed daily slot on `date`, in the fixed order.
///
/// A slot is free iff no pending or confirmed booking holds the (date, time)
/// pair and the administrator has not disabled it for that date. Pure function
/// of the document; a date matching no booking simply yields all slots free.
pub fn availability(data: &StoreData, date: &str) -> Vec<SlotStatus> {
    let taken: HashSet<&str> = data
        .bookings
        .iter()
        .filter(|b| b.date == date && b.occupies_slot())
        .map(|b| b.time.as_str())
        .collect();

    let disabled = data.disabled_slots.get(date);

    DAILY_SLOTS
        .iter()
        .map(|&time| SlotStatus {
            time: time.to_string(),
            is_available: !taken.contains(time)
                && !disabled.is_some_and(|d| d.iter().any(|t| t == time)),
        })
        .collect()
}

pub fn is_slot_available(data: &StoreData, date: &str, time: &str) -> bool {
    availability(data, date)
        .iter()
        .any(|s| s.time == time && s.is_available)
}

/// Idempotently adds or removes `time` in the disabled set for `date`.
/// The time is not checked against the fixed slot list; an off-grid value is
/// stored but never affects availability.
pub fn set_slot_disabled(data: &mut StoreData, date: &str, time: &str, disabled: bool) {
    let entry = data.disabled_slots.entry(date.to_string()).or_default();

    if disabled {
        if !entry.iter().any(|t| t == time) {
            entry.push(time.to_string());
        }
    } else {
        entry.retain(|t| t != time);
        if entry.is_empty() {
            data.disabled_slots.remove(date);
        }
    }
}
