//! Half-hour addressing over a repeating week.
//!
//! Days run 0=Sunday..6=Saturday and half-hour indexes 0..47, where
//! `index = hour * 2 + (minute == 30)`. The canonical key of a slot is
//! `"{day}-{index}"`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::{RecurError, RecurResult};

pub const DAYS_PER_WEEK: u8 = 7;
pub const SLOTS_PER_DAY: u8 = 48;
pub const SLOTS_PER_WEEK: usize = 7 * 48;
pub const SLOT_MINUTES: u16 = 30;
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// One half-hour cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekSlot {
    day: u8,
    half_hour: u8,
}

impl WeekSlot {
    /// ## Summary
    /// Creates a slot from a day-of-week and half-hour index.
    ///
    /// ## Errors
    /// Returns `InvalidSlot` if `day` is not in 0..=6 or `half_hour` is not in 0..=47.
    pub fn new(day: u8, half_hour: u8) -> RecurResult<Self> {
        if day >= DAYS_PER_WEEK {
            return Err(RecurError::InvalidSlot(format!(
                "day {day} outside 0..={}",
                DAYS_PER_WEEK - 1
            )));
        }
        if half_hour >= SLOTS_PER_DAY {
            return Err(RecurError::InvalidSlot(format!(
                "half-hour index {half_hour} outside 0..={}",
                SLOTS_PER_DAY - 1
            )));
        }
        Ok(Self { day, half_hour })
    }

    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    #[must_use]
    pub const fn half_hour(self) -> u8 {
        self.half_hour
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.half_hour / 2
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        (self.half_hour % 2) * 30
    }

    /// Minutes past midnight at which this slot starts.
    #[must_use]
    pub fn start_minute(self) -> u16 {
        u16::from(self.half_hour) * SLOT_MINUTES
    }

    /// Returns the canonical `"{day}-{index}"` key.
    #[must_use]
    pub fn key(self) -> String {
        self.to_string()
    }

    /// Iterates every slot of the week, Sunday 00:00 first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..DAYS_PER_WEEK)
            .flat_map(|day| (0..SLOTS_PER_DAY).map(move |half_hour| Self { day, half_hour }))
    }
}

impl fmt::Display for WeekSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.half_hour)
    }
}

impl FromStr for WeekSlot {
    type Err = RecurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, half_hour) = s
            .split_once('-')
            .ok_or_else(|| RecurError::ParseError(format!("slot key {s:?} is not \"day-index\"")))?;
        let day = day
            .parse::<u8>()
            .map_err(|e| RecurError::ParseError(format!("slot key {s:?}: day: {e}")))?;
        let half_hour = half_hour
            .parse::<u8>()
            .map_err(|e| RecurError::ParseError(format!("slot key {s:?}: index: {e}")))?;
        Self::new(day, half_hour)
    }
}

/// ## Summary
/// Returns the canonical key `"{day}-{half_hour}"` for a grid cell.
///
/// ## Errors
/// Returns `InvalidSlot` if `day` is not in 0..=6 or `half_hour` is not in 0..=47.
pub fn slot_id(day: u8, half_hour: u8) -> RecurResult<String> {
    WeekSlot::new(day, half_hour).map(WeekSlot::key)
}

/// ## Summary
/// Converts a half-hour index to its wall-clock start `(hour, minute)`.
#[must_use]
pub const fn slot_to_time(half_hour: u8) -> (u8, u8) {
    (half_hour / 2, (half_hour % 2) * 30)
}

/// ## Summary
/// Converts a wall-clock start time to its half-hour index.
///
/// ## Errors
/// Returns `InvalidSlot` if `minute` is not 0 or 30, or `hour` is not in 0..=23.
pub fn time_to_slot(hour: u8, minute: u8) -> RecurResult<u8> {
    if hour >= SLOTS_PER_DAY / 2 {
        return Err(RecurError::InvalidSlot(format!("hour {hour} outside 0..=23")));
    }
    match minute {
        0 => Ok(hour * 2),
        30 => Ok(hour * 2 + 1),
        other => Err(RecurError::InvalidSlot(format!(
            "minute {other} is not a half-hour boundary"
        ))),
    }
}

/// Day-of-week index of a date, 0=Sunday..6=Saturday.
#[must_use]
pub fn weekday_index(date: NaiveDate) -> u8 {
    // num_days_from_sunday is always in 0..7
    u8::try_from(date.weekday().num_days_from_sunday()).unwrap_or_default()
}
