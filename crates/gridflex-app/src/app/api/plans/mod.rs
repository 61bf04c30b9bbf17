//! Control plan CRUD and application to customers.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, Router, handler, writing::Json};
use serde::Deserialize;

use gridflex_recur::{ControlPlan, Schedule};

use super::{PLANS_ROUTE_COMPONENT, json_body, path_param};
use crate::error::AppResult;
use crate::state::get_state_from_depot;

/// ## Summary
/// Apply request payload
#[derive(Debug, Deserialize)]
pub struct ApplyPlanRequest {
    pub icps: Vec<String>,
}

/// ## Summary
/// GET /api/plans - Every control plan, oldest first.
#[handler]
async fn list(depot: &mut Depot, res: &mut Response) {
    match get_state_from_depot(depot) {
        Ok(state) => {
            let plans = state.plans.read().await;
            res.render(Json(plans.list().to_vec()));
        }
        Err(err) => err.render(res),
    }
}

/// ## Summary
/// POST /api/plans - Creates a plan, or replaces the plan with the same id.
///
/// Responds 201 when the plan was inserted and 200 when it replaced a
/// stored plan with the same id.
///
/// ## Errors
/// Returns HTTP 400 for a malformed or invalid plan and HTTP 409 when the
/// name is already taken by another plan.
#[handler]
async fn save(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match save_inner(req, depot).await {
        Ok((plan, created)) => {
            if created {
                res.status_code(StatusCode::CREATED);
            }
            res.render(Json(plan));
        }
        Err(err) => err.render(res),
    }
}

async fn save_inner(req: &mut Request, depot: &Depot) -> AppResult<(ControlPlan, bool)> {
    let plan: ControlPlan = json_body(req).await?;
    let state = get_state_from_depot(depot)?;
    let (saved, created) = state.plans.write().await.save(plan)?;
    tracing::info!(plan_id = %saved.id, created, "Saved control plan");
    Ok((saved, created))
}

/// ## Summary
/// DELETE /api/plans/{id}
///
/// ## Errors
/// Returns HTTP 404 for an unknown plan.
#[handler]
async fn delete(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match delete_inner(req, depot).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(err) => err.render(res),
    }
}

async fn delete_inner(req: &Request, depot: &Depot) -> AppResult<()> {
    let id = path_param(req, "id")?;
    let state = get_state_from_depot(depot)?;
    state.plans.write().await.delete(&id)?;
    Ok(())
}

/// ## Summary
/// POST /api/plans/{id}/apply - Saves the plan's schedule for each ICP.
///
/// Responds with the schedule as stored, tagged with the plan id.
///
/// ## Errors
/// Returns HTTP 404 for an unknown plan and HTTP 400 for an empty ICP list.
#[handler]
async fn apply(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match apply_inner(req, depot).await {
        Ok(schedule) => res.render(Json(schedule)),
        Err(err) => err.render(res),
    }
}

async fn apply_inner(req: &mut Request, depot: &Depot) -> AppResult<Schedule> {
    let id = path_param(req, "id")?;
    let body: ApplyPlanRequest = json_body(req).await?;
    let state = get_state_from_depot(depot)?;

    // Lock order: plans, then schedules.
    let plans = state.plans.read().await;
    let mut schedules = state.schedules.write().await;
    Ok(plans.apply(&id, &body.icps, &mut schedules)?)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PLANS_ROUTE_COMPONENT)
        .get(list)
        .post(save)
        .push(
            Router::with_path("{id}")
                .delete(delete)
                .push(Router::with_path("apply").post(apply)),
        )
}
