//! Per-weekday run tables decoded from a recurrence string.

use std::collections::BTreeSet;

use crate::recurrence::parse_clauses;
use crate::slot::SLOT_MINUTES;

/// A contiguous interval of selected time within one day, in minutes past
/// midnight. `end` may equal `24 * 60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRun {
    pub start: u16,
    pub end: u16,
}

impl SlotRun {
    #[must_use]
    pub fn duration_minutes(self) -> u16 {
        self.end - self.start
    }
}

/// Merged runs for each day of the week, Sunday first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekPattern {
    days: [Vec<SlotRun>; 7],
}

impl WeekPattern {
    /// ## Summary
    /// Decodes a recurrence string into merged runs for every weekday.
    ///
    /// Start times come from each clause's hour × minute cross product and
    /// are deduplicated before merging, so runs of one pattern never overlap.
    #[must_use]
    pub fn from_recurrence(recurrence: &str) -> Self {
        let mut starts: [BTreeSet<u16>; 7] = Default::default();
        for clause in parse_clauses(recurrence) {
            for &day in &clause.days {
                if let Some(day_starts) = starts.get_mut(usize::from(day)) {
                    day_starts.extend(clause.start_minutes());
                }
            }
        }

        Self {
            days: starts.map(|day_starts| merge_runs(&day_starts)),
        }
    }

    /// Runs on `day` (0=Sunday..6=Saturday), earliest first.
    #[must_use]
    pub fn runs_on(&self, day: u8) -> &[SlotRun] {
        self.days
            .get(usize::from(day))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }
}

/// Each start opens a half-hour; a start at or before the current run's end
/// extends it, anything later closes it.
fn merge_runs(starts: &BTreeSet<u16>) -> Vec<SlotRun> {
    let mut runs: Vec<SlotRun> = Vec::new();
    for &start in starts {
        let end = start + SLOT_MINUTES;
        match runs.last_mut() {
            Some(run) if start <= run.end => run.end = run.end.max(end),
            _ => runs.push(SlotRun { start, end }),
        }
    }
    runs
}
