//! Customer schedule bookkeeping, control plans and calendar views built
//! on the recurrence model.

pub mod calendar;
pub mod error;
pub mod plan;
pub mod schedule;
