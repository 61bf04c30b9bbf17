//! Router fixtures shared by handler tests.

use salvo::prelude::*;

use gridflex_core::config::Settings;

use crate::state::{AppState, ConfigHandler, StateHandler};

pub(crate) const BASE: &str = "http://127.0.0.1:5800";

/// Full API router over fresh, empty stores.
pub(crate) fn test_service() -> Service {
    test_service_with(Settings::defaults(), AppState::default())
}

pub(crate) fn test_service_with(settings: Settings, state: AppState) -> Service {
    let router = Router::new()
        .hoop(StateHandler { state })
        .hoop(ConfigHandler::new(settings))
        .push(super::routes());
    Service::new(router)
}

pub(crate) fn url(path: &str) -> String {
    format!("{BASE}{path}")
}
