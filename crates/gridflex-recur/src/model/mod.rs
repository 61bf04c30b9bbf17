//! Persisted schedule and control-plan records.

mod schedule;

pub use schedule::{ControlPlan, PlanSchedule, Schedule, Scheduled};
