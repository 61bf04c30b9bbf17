use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use gridflex_core::types::DerType;

use super::pattern::{SlotRun, WeekPattern};
use crate::model::Scheduled;
use crate::recurrence::is_unscheduled;
use crate::slot::weekday_index;

/// A concrete interval during which a DER type is scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_hours: f64,
    pub der_type: DerType,
}

impl Occurrence {
    fn from_run(date: NaiveDate, run: SlotRun, der_type: DerType) -> Option<Self> {
        let midnight = date.and_time(NaiveTime::MIN);
        let start = midnight.checked_add_signed(TimeDelta::minutes(i64::from(run.start)))?;
        let end = midnight.checked_add_signed(TimeDelta::minutes(i64::from(run.end)))?;
        Some(Self {
            start,
            end,
            duration_hours: f64::from(run.duration_minutes()) / 60.0,
            der_type,
        })
    }
}

/// Occurrences for one date of a range query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOccurrences {
    pub date: NaiveDate,
    pub occurrences: Vec<Occurrence>,
}

/// ## Summary
/// Expands schedules into the merged intervals active on `date`.
///
/// Schedules with no recurrence, or whose validity window excludes `date`,
/// contribute nothing. Runs are reported per schedule in input order and
/// are never merged across schedules, even when they touch.
#[must_use]
#[tracing::instrument(skip(schedules), fields(schedule_count = schedules.len()))]
pub fn get_events_for_day<S: Scheduled>(date: NaiveDate, schedules: &[S]) -> Vec<Occurrence> {
    let weekday = weekday_index(date);
    let mut occurrences = Vec::new();
    for schedule in schedules {
        if is_unscheduled(schedule.recurrence()) || !schedule.is_active_on(date) {
            continue;
        }
        let pattern = WeekPattern::from_recurrence(schedule.recurrence());
        occurrences.extend(instantiate(date, pattern.runs_on(weekday), schedule.der_type()));
    }
    tracing::trace!(count = occurrences.len(), "Expanded day");
    occurrences
}

/// ## Summary
/// Expands schedules for every date in `[start, end]`.
///
/// Each recurrence is decoded once and reused for every date, which makes
/// this the variant to use for month views and bulk queries. The result has
/// one entry per date, in order, including dates with no occurrences.
/// `end < start` yields an empty result.
#[must_use]
#[tracing::instrument(skip(schedules), fields(schedule_count = schedules.len()))]
pub fn get_events_for_range<S: Scheduled>(
    start: NaiveDate,
    end: NaiveDate,
    schedules: &[S],
) -> Vec<DayOccurrences> {
    if end < start {
        tracing::debug!("Range end precedes start");
        return Vec::new();
    }

    let patterns: Vec<(&S, WeekPattern)> = schedules
        .iter()
        .filter(|schedule| !is_unscheduled(schedule.recurrence()))
        .map(|schedule| (schedule, WeekPattern::from_recurrence(schedule.recurrence())))
        .filter(|(_, pattern)| !pattern.is_empty())
        .collect();

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| {
            let weekday = weekday_index(date);
            let occurrences = patterns
                .iter()
                .filter(|(schedule, _)| schedule.is_active_on(date))
                .flat_map(|(schedule, pattern)| {
                    instantiate(date, pattern.runs_on(weekday), schedule.der_type())
                })
                .collect();
            DayOccurrences { date, occurrences }
        })
        .collect()
}

fn instantiate(
    date: NaiveDate,
    runs: &[SlotRun],
    der_type: DerType,
) -> impl Iterator<Item = Occurrence> + '_ {
    runs.iter()
        .filter_map(move |&run| Occurrence::from_run(date, run, der_type))
}
