//! Month, week and day calendar grids populated with occurrences.

mod view;

pub use view::{Calendar, CalendarCell, CalendarView, build, navigate, title};
