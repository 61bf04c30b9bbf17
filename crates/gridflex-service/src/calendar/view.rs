use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use gridflex_recur::{Occurrence, Scheduled, get_events_for_range};

use crate::error::{ServiceError, ServiceResult};

/// Granularity of a calendar page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

impl CalendarView {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarView {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            "day" => Ok(Self::Day),
            other => Err(ServiceError::ValidationError(format!(
                "unknown calendar view {other:?}"
            ))),
        }
    }
}

/// One rendered date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for the leading and trailing days of adjacent months in a month view.
    pub in_current_period: bool,
    pub occurrences: Vec<Occurrence>,
}

/// A full calendar page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub view: CalendarView,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub cells: Vec<CalendarCell>,
}

/// ## Summary
/// Builds the calendar page for `view` around `anchor`.
///
/// Month pages cover whole weeks: from the Sunday on or before the first of
/// the month to the Saturday on or after its last day. Week pages run
/// Sunday to Saturday. Day pages hold the anchor alone.
///
/// ## Errors
/// Returns `ValidationError` if the page would extend past the supported
/// date range.
#[tracing::instrument(skip(schedules), fields(schedule_count = schedules.len()))]
pub fn build<S: Scheduled>(
    view: CalendarView,
    anchor: NaiveDate,
    schedules: &[S],
) -> ServiceResult<Calendar> {
    let (start, end) = span(view, anchor)?;
    let cells = get_events_for_range(start, end, schedules)
        .into_iter()
        .map(|day| CalendarCell {
            in_current_period: view != CalendarView::Month || day.date.month() == anchor.month(),
            date: day.date,
            occurrences: day.occurrences,
        })
        .collect();

    Ok(Calendar {
        view,
        title: title(view, anchor)?,
        start,
        end,
        cells,
    })
}

/// ## Summary
/// Moves `date` by `step` pages of `view`.
///
/// Month steps keep the day of month where possible and clamp to the last
/// day otherwise.
///
/// ## Errors
/// Returns `ValidationError` if the result is out of range.
pub fn navigate(view: CalendarView, date: NaiveDate, step: i32) -> ServiceResult<NaiveDate> {
    let magnitude = step.unsigned_abs();
    let moved = match view {
        CalendarView::Month => {
            let months = Months::new(magnitude);
            if step < 0 {
                date.checked_sub_months(months)
            } else {
                date.checked_add_months(months)
            }
        }
        CalendarView::Week | CalendarView::Day => {
            let per_step = if view == CalendarView::Week { 7 } else { 1 };
            let days = Days::new(u64::from(magnitude) * per_step);
            if step < 0 {
                date.checked_sub_days(days)
            } else {
                date.checked_add_days(days)
            }
        }
    };
    moved.ok_or_else(|| out_of_range(date))
}

/// ## Summary
/// Heading for the page of `view` containing `date`.
///
/// `"October 2026"`, `"Oct 18 - 24, 2026"` or `"October 19, 2026"`. Weeks
/// that cross a month or year boundary name both ends in full.
///
/// ## Errors
/// Returns `ValidationError` if the week around `date` is out of range.
pub fn title(view: CalendarView, date: NaiveDate) -> ServiceResult<String> {
    Ok(match view {
        CalendarView::Month => date.format("%B %Y").to_string(),
        CalendarView::Day => date.format("%B %-d, %Y").to_string(),
        CalendarView::Week => {
            let (start, end) = week_span(date)?;
            if start.year() != end.year() {
                format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
            } else if start.month() != end.month() {
                format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
            } else {
                format!("{} - {}", start.format("%b %-d"), end.format("%-d, %Y"))
            }
        }
    })
}

fn span(view: CalendarView, anchor: NaiveDate) -> ServiceResult<(NaiveDate, NaiveDate)> {
    match view {
        CalendarView::Day => Ok((anchor, anchor)),
        CalendarView::Week => week_span(anchor),
        CalendarView::Month => {
            let first = anchor.with_day(1).ok_or_else(|| out_of_range(anchor))?;
            let last = first
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .ok_or_else(|| out_of_range(anchor))?;
            Ok((week_span(first)?.0, week_span(last)?.1))
        }
    }
}

/// Sunday..=Saturday around `date`.
fn week_span(date: NaiveDate) -> ServiceResult<(NaiveDate, NaiveDate)> {
    let back = Days::new(u64::from(date.weekday().num_days_from_sunday()));
    let start = date
        .checked_sub_days(back)
        .ok_or_else(|| out_of_range(date))?;
    let end = start
        .checked_add_days(Days::new(6))
        .ok_or_else(|| out_of_range(date))?;
    Ok((start, end))
}

fn out_of_range(date: NaiveDate) -> ServiceError {
    ServiceError::ValidationError(format!("calendar page around {date} is out of range"))
}
