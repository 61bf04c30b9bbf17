//! Depot plumbing: the shared stores and the settings every handler reads.

use std::sync::Arc;

use salvo::async_trait;
use tokio::sync::RwLock;

use gridflex_core::config::Settings;
use gridflex_core::error::CoreError;
use gridflex_service::plan::PlanBook;
use gridflex_service::schedule::ScheduleBook;

use crate::error::AppResult;

/// Shared in-memory stores behind the API.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub schedules: Arc<RwLock<ScheduleBook>>,
    pub plans: Arc<RwLock<PlanBook>>,
}

pub struct StateHandler {
    pub state: AppState,
}

#[async_trait]
impl salvo::Handler for StateHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // Handles share the underlying books
        depot.inject(self.state.clone());
    }
}

/// Injects the loaded settings; every request sees the same `Arc`.
pub struct ConfigHandler {
    settings: Arc<Settings>,
}

impl ConfigHandler {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.settings));
    }
}

/// ## Summary
/// Retrieves the shared application state from the depot.
///
/// ## Errors
/// Returns an error if the state is not found in the depot.
pub fn get_state_from_depot(depot: &salvo::Depot) -> AppResult<AppState> {
    depot
        .obtain::<AppState>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Application state not found in depot").into())
}

/// ## Summary
/// Retrieves the settings injected by [`ConfigHandler`].
///
/// ## Errors
/// Returns an error if no settings were injected.
pub fn get_config_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Settings>> {
    depot
        .obtain::<Arc<Settings>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Configuration not found in depot").into())
}
