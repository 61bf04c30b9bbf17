//! Occurrence expansion over caller-supplied schedules.

use chrono::NaiveDate;
use salvo::{Depot, Request, Response, Router, handler, writing::Json};
use serde::Deserialize;

use gridflex_core::error::CoreError;
use gridflex_recur::{DayOccurrences, Schedule, get_events_for_day, get_events_for_range};

use super::{OCCURRENCES_ROUTE_COMPONENT, json_body};
use crate::state::get_config_from_depot;
use crate::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct DayRequest {
    pub date: NaiveDate,
    pub schedules: Vec<Schedule>,
}

#[derive(Debug, Deserialize)]
pub struct RangeRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub schedules: Vec<Schedule>,
}

/// ## Summary
/// POST /api/occurrences/day - Merged intervals active on one date.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body.
#[handler]
async fn day(req: &mut Request, res: &mut Response) {
    match json_body::<DayRequest>(req).await {
        Ok(body) => res.render(Json(get_events_for_day(body.date, &body.schedules))),
        Err(err) => err.render(res),
    }
}

/// ## Summary
/// POST /api/occurrences/range - Merged intervals for every date in a range.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body or a range wider than
/// `schedule.max_range_days`.
#[handler]
async fn range(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match range_inner(req, depot).await {
        Ok(days) => res.render(Json(days)),
        Err(err) => err.render(res),
    }
}

async fn range_inner(req: &mut Request, depot: &Depot) -> AppResult<Vec<DayOccurrences>> {
    let body: RangeRequest = json_body(req).await?;
    let settings = get_config_from_depot(depot)?;

    let days = (body.end - body.start).num_days() + 1;
    if days > i64::from(settings.schedule.max_range_days) {
        return Err(CoreError::ValidationError(format!(
            "range covers {days} days, at most {} allowed",
            settings.schedule.max_range_days
        ))
        .into());
    }

    Ok(get_events_for_range(body.start, body.end, &body.schedules))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(OCCURRENCES_ROUTE_COMPONENT)
        .push(Router::with_path("day").post(day))
        .push(Router::with_path("range").post(range))
}
