//! Recurrence string serialisation.

use std::collections::{BTreeMap, BTreeSet};

use gridflex_core::constants::NO_SCHEDULE_SENTINEL;
use gridflex_core::types::EncodingMode;

use super::clause::Clause;
use crate::slot::SlotSelection;

/// ## Summary
/// Encodes a selection in the historical (compat) format.
///
/// One clause per selected day, holding the union of that day's hours and
/// the union of its minutes. Partial-hour selections that differ only in
/// which half of each hour is chosen encode identically. An empty
/// selection encodes as the "no schedule" sentinel.
#[must_use]
pub fn slots_to_cron(selection: &SlotSelection) -> String {
    slots_to_cron_with_mode(selection, EncodingMode::Compat)
}

/// ## Summary
/// Encodes a selection using the requested format.
#[must_use]
pub fn slots_to_cron_with_mode(selection: &SlotSelection, mode: EncodingMode) -> String {
    let clauses = match mode {
        EncodingMode::Compat => compat_clauses(selection),
        EncodingMode::Exact => exact_clauses(selection),
    };
    render(&clauses)
}

/// ## Summary
/// Whether compat encoding of `selection` decodes back to the same slots.
///
/// Holds exactly when, on every day, each selected hour uses the full set
/// of minute values selected anywhere on that day.
#[must_use]
pub fn is_lossless(selection: &SlotSelection) -> bool {
    minutes_by_hour(selection).values().all(|hours| {
        let mut sets = hours.values();
        let Some(first) = sets.next() else {
            return true;
        };
        sets.all(|set| set == first)
    })
}

/// Joins clauses with `;`, or yields the sentinel when there are none.
#[must_use]
pub fn render(clauses: &[Clause]) -> String {
    if clauses.is_empty() {
        return NO_SCHEDULE_SENTINEL.to_string();
    }
    clauses
        .iter()
        .map(Clause::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

fn compat_clauses(selection: &SlotSelection) -> Vec<Clause> {
    let mut by_day: BTreeMap<u8, (BTreeSet<u8>, BTreeSet<u8>)> = BTreeMap::new();
    for slot in selection {
        let (hours, minutes) = by_day.entry(slot.day()).or_default();
        hours.insert(slot.hour());
        minutes.insert(slot.minute());
    }

    by_day
        .into_iter()
        .map(|(day, (hours, minutes))| Clause::new(minutes, hours, [day]))
        .collect()
}

fn exact_clauses(selection: &SlotSelection) -> Vec<Clause> {
    let mut clauses = Vec::new();
    for (day, hours) in minutes_by_hour(selection) {
        let mut by_minutes: BTreeMap<BTreeSet<u8>, Vec<u8>> = BTreeMap::new();
        for (hour, minutes) in hours {
            by_minutes.entry(minutes).or_default().push(hour);
        }
        clauses.extend(
            by_minutes
                .into_iter()
                .map(|(minutes, hours)| Clause::new(minutes, hours, [day])),
        );
    }
    clauses
}

/// day -> hour -> minutes selected in that hour
fn minutes_by_hour(selection: &SlotSelection) -> BTreeMap<u8, BTreeMap<u8, BTreeSet<u8>>> {
    let mut days: BTreeMap<u8, BTreeMap<u8, BTreeSet<u8>>> = BTreeMap::new();
    for slot in selection {
        days.entry(slot.day())
            .or_default()
            .entry(slot.hour())
            .or_default()
            .insert(slot.minute());
    }
    days
}
