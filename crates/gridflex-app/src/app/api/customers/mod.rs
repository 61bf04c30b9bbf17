//! Per-customer (ICP) schedule views.

use chrono::NaiveDate;
use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, Router, handler, writing::Json};

use gridflex_core::types::DerType;
use gridflex_recur::Schedule;
use gridflex_service::calendar::{self, Calendar, CalendarView};
use gridflex_service::schedule::ScheduleSummary;

use super::{CUSTOMERS_ROUTE_COMPONENT, path_param};
use crate::error::{AppError, AppResult};
use crate::state::get_state_from_depot;

/// ## Summary
/// GET /api/customers/{icp} - Whether the ICP has schedules, and for which DER types.
#[handler]
async fn summary(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match summary_inner(req, depot).await {
        Ok(body) => res.render(Json(body)),
        Err(err) => err.render(res),
    }
}

async fn summary_inner(req: &Request, depot: &Depot) -> AppResult<ScheduleSummary> {
    let icp = path_param(req, "icp")?;
    let state = get_state_from_depot(depot)?;
    let book = state.schedules.read().await;
    Ok(book.summary(&icp))
}

/// ## Summary
/// GET /api/customers/{icp}/schedules - Every schedule saved for the ICP.
#[handler]
async fn list_schedules(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match list_schedules_inner(req, depot).await {
        Ok(body) => res.render(Json(body)),
        Err(err) => err.render(res),
    }
}

async fn list_schedules_inner(req: &Request, depot: &Depot) -> AppResult<Vec<Schedule>> {
    let icp = path_param(req, "icp")?;
    let state = get_state_from_depot(depot)?;
    let book = state.schedules.read().await;
    Ok(book.schedules(&icp).to_vec())
}

/// ## Summary
/// DELETE /api/customers/{icp}/schedules/{der_type} - Removes one schedule.
///
/// `der_type` is a label (`Hot water`) or slug (`hot-water`).
///
/// ## Errors
/// Returns HTTP 400 for an unknown DER type and HTTP 404 when the ICP has
/// no schedule of that type.
#[handler]
async fn delete_schedule(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match delete_schedule_inner(req, depot).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(err) => err.render(res),
    }
}

async fn delete_schedule_inner(req: &Request, depot: &Depot) -> AppResult<()> {
    let icp = path_param(req, "icp")?;
    let der_type = parse_der_type(&path_param(req, "der_type")?)?;
    let state = get_state_from_depot(depot)?;
    state.schedules.write().await.delete(&icp, der_type)?;
    tracing::info!(icp = %icp, %der_type, "Deleted schedule");
    Ok(())
}

/// ## Summary
/// GET /api/customers/{icp}/calendar?view=month|week|day&date=YYYY-MM-DD
///
/// `view` defaults to `month` and `date` to today.
///
/// ## Errors
/// Returns HTTP 400 for an unknown view or unparseable date.
#[handler]
async fn calendar_page(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match calendar_inner(req, depot).await {
        Ok(body) => res.render(Json(body)),
        Err(err) => err.render(res),
    }
}

async fn calendar_inner(req: &Request, depot: &Depot) -> AppResult<Calendar> {
    let icp = path_param(req, "icp")?;
    let view = match req.query::<String>("view") {
        Some(view) => view.parse::<CalendarView>()?,
        None => CalendarView::default(),
    };
    let date = match req.query::<String>("date") {
        Some(date) => date
            .parse::<NaiveDate>()
            .map_err(|e| AppError::BadRequest(format!("invalid date {date:?}: {e}")))?,
        None => chrono::Local::now().date_naive(),
    };

    let state = get_state_from_depot(depot)?;
    let book = state.schedules.read().await;
    Ok(calendar::build(view, date, book.schedules(&icp))?)
}

/// ## Summary
/// GET /api/customers/{icp}/available-der-types - DER types the ICP has no schedule for.
#[handler]
async fn available_der_types(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match available_inner(req, depot).await {
        Ok(body) => res.render(Json(body)),
        Err(err) => err.render(res),
    }
}

async fn available_inner(req: &Request, depot: &Depot) -> AppResult<Vec<DerType>> {
    let icp = path_param(req, "icp")?;
    let state = get_state_from_depot(depot)?;
    let book = state.schedules.read().await;
    Ok(book.available_der_types(&[icp]))
}

fn parse_der_type(raw: &str) -> AppResult<DerType> {
    DerType::parse(raw).ok_or_else(|| AppError::BadRequest(format!("unknown DER type {raw:?}")))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CUSTOMERS_ROUTE_COMPONENT).push(
        Router::with_path("{icp}")
            .get(summary)
            .push(
                Router::with_path("schedules")
                    .get(list_schedules)
                    .push(Router::with_path("{der_type}").delete(delete_schedule)),
            )
            .push(Router::with_path("calendar").get(calendar_page))
            .push(Router::with_path("available-der-types").get(available_der_types)),
    )
}
