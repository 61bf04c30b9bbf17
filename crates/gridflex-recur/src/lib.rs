//! Weekly half-hour schedules for controllable-load programs.
//!
//! A week is addressed as a 7×48 grid of half-hour slots. Users paint a
//! [`SlotSelection`] on that grid, the selection is persisted as a compact
//! cron-lookalike recurrence string, and calendar views expand the string
//! back into merged [`Occurrence`] intervals for any date they render.
//!
//! All operations here are synchronous and pure. Malformed recurrence data
//! never produces an error: undecodable clauses are logged and skipped.

pub mod error;
pub mod expand;
pub mod model;
pub mod recurrence;
pub mod select;
pub mod slot;

pub use expand::{DayOccurrences, Occurrence, get_events_for_day, get_events_for_range};
pub use gridflex_core::types::{DerType, EncodingMode};
pub use model::{ControlPlan, PlanSchedule, Schedule, Scheduled};
pub use recurrence::{cron_to_slots, slots_to_cron, slots_to_cron_with_mode};
pub use select::{DragState, GridEditor, SelectionMode};
pub use slot::{SlotSelection, WeekSlot, slot_id, slot_to_time, time_to_slot};
