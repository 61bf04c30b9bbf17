//! Per-customer schedules keyed by DER type.

mod book;

pub use book::{ScheduleBook, ScheduleSummary};
