//! Slot grid model: addressing of the 7×48 weekly half-hour grid.

mod grid;
mod selection;

pub use grid::{
    DAYS_PER_WEEK, MINUTES_PER_DAY, SLOT_MINUTES, SLOTS_PER_DAY, SLOTS_PER_WEEK, WeekSlot,
    slot_id, slot_to_time, time_to_slot, weekday_index,
};
pub use selection::SlotSelection;
