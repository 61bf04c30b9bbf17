mod helpers;

mod occurrences;
mod plans;
mod recurrence;
mod schedules;
