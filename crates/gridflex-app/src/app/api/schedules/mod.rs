//! Saving a schedule for one or more customers.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, Router, handler};
use serde::Deserialize;

use gridflex_recur::Schedule;

use super::{SCHEDULES_ROUTE_COMPONENT, json_body};
use crate::error::AppResult;
use crate::state::get_state_from_depot;

/// ## Summary
/// Save request payload
#[derive(Debug, Deserialize)]
pub struct SaveScheduleRequest {
    pub icps: Vec<String>,
    pub schedule: Schedule,
}

/// ## Summary
/// PUT /api/schedules - Saves a schedule for every listed ICP.
///
/// Each ICP's existing schedule for the same DER type is replaced.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body, an empty ICP list or a validity
/// window that ends before it starts.
#[handler]
async fn save(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match save_inner(req, depot).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(err) => err.render(res),
    }
}

async fn save_inner(req: &mut Request, depot: &Depot) -> AppResult<()> {
    let body: SaveScheduleRequest = json_body(req).await?;
    let state = get_state_from_depot(depot)?;
    state.schedules.write().await.save(&body.icps, &body.schedule)?;
    tracing::info!(
        icp_count = body.icps.len(),
        der_type = %body.schedule.der_type,
        "Saved schedule"
    );
    Ok(())
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(SCHEDULES_ROUTE_COMPONENT).put(save)
}
