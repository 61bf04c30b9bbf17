//! Recurrence codec: weekly slot selections to and from the compact
//! `minutes hours * * days` clause list.
//!
//! Grammar: clauses joined by `;`, each `minuteList hourList * * dayList`
//! with comma-separated ascending integers. The empty selection is the
//! literal `"No schedule selected"`.

mod build;
mod clause;
mod parse;

pub use build::{is_lossless, render, slots_to_cron, slots_to_cron_with_mode};
pub use clause::Clause;
pub use parse::{SkipReason, cron_to_slots, is_unscheduled, parse_clauses};
