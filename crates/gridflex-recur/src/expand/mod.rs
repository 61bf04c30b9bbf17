//! Occurrence expansion: recurrence strings to dated, merged intervals.

mod expander;
mod pattern;

pub use expander::{DayOccurrences, Occurrence, get_events_for_day, get_events_for_range};
pub use pattern::{SlotRun, WeekPattern};
