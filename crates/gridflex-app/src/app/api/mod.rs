mod app_specific;
mod customers;
mod occurrences;
mod plans;
mod recurrence;
mod schedules;

#[cfg(test)]
pub(crate) mod test_support;

use salvo::Request;
use salvo::Router;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

// Re-export route constants from core
pub use gridflex_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, CUSTOMERS_ROUTE_COMPONENT, CUSTOMERS_ROUTE_PREFIX,
    OCCURRENCES_ROUTE_COMPONENT, OCCURRENCES_ROUTE_PREFIX, PLANS_ROUTE_COMPONENT,
    PLANS_ROUTE_PREFIX, RECURRENCE_ROUTE_COMPONENT, RECURRENCE_ROUTE_PREFIX,
    SCHEDULES_ROUTE_COMPONENT, SCHEDULES_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router with every handler mounted under `/api`.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(recurrence::routes())
        .push(occurrences::routes())
        .push(customers::routes())
        .push(schedules::routes())
        .push(plans::routes())
}

/// ## Summary
/// Parses the JSON request body.
///
/// ## Errors
/// Returns `BadRequest` if the body is missing or does not match `T`.
pub(crate) async fn json_body<T: DeserializeOwned>(req: &mut Request) -> AppResult<T> {
    req.parse_json().await.map_err(|e| {
        tracing::debug!(error = ?e, "Failed to parse request body");
        AppError::BadRequest(format!("invalid request body: {e}"))
    })
}

/// ## Summary
/// Reads a required path parameter.
///
/// ## Errors
/// Returns `BadRequest` if the router did not capture `name`.
pub(crate) fn path_param(req: &Request, name: &str) -> AppResult<String> {
    req.param::<String>(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("missing path parameter {name}")))
}
