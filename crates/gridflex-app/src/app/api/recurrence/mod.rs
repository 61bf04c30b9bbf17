//! Slot selection <-> recurrence string conversion.

use salvo::{Depot, Request, Response, Router, handler, writing::Json};
use serde::{Deserialize, Serialize};

use gridflex_core::types::EncodingMode;
use gridflex_recur::recurrence::is_lossless;
use gridflex_recur::{SlotSelection, cron_to_slots, slots_to_cron_with_mode};

use super::{RECURRENCE_ROUTE_COMPONENT, json_body};
use crate::state::get_config_from_depot;
use crate::error::AppResult;

/// ## Summary
/// Encode request payload. `slots` accepts a key list or a `{key: bool}` map.
#[derive(Debug, Deserialize)]
pub struct EncodeRequest {
    pub slots: SlotSelection,
    #[serde(default)]
    pub mode: Option<EncodingMode>,
}

#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub cron: String,
    pub mode: EncodingMode,
    /// Whether decoding `cron` gives back exactly the submitted slots.
    pub lossless: bool,
}

#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    pub cron: String,
}

#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    pub slots: SlotSelection,
}

/// ## Summary
/// POST /api/recurrence/encode - Serialises a slot selection.
///
/// Uses the configured encoding when the request names none.
///
/// ## Errors
/// Returns HTTP 400 for a malformed body or an invalid slot key.
#[handler]
async fn encode(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match encode_inner(req, depot).await {
        Ok(body) => res.render(Json(body)),
        Err(err) => err.render(res),
    }
}

async fn encode_inner(req: &mut Request, depot: &Depot) -> AppResult<EncodeResponse> {
    let body: EncodeRequest = json_body(req).await?;
    let settings = get_config_from_depot(depot)?;
    let mode = body.mode.unwrap_or(settings.schedule.encoding);

    let cron = slots_to_cron_with_mode(&body.slots, mode);
    let lossless = mode == EncodingMode::Exact || is_lossless(&body.slots);
    tracing::debug!(slots = body.slots.len(), %mode, lossless, "Encoded selection");

    Ok(EncodeResponse {
        cron,
        mode,
        lossless,
    })
}

/// ## Summary
/// POST /api/recurrence/decode - Expands a recurrence string into slot keys.
///
/// Never fails on malformed recurrence text: unreadable clauses are skipped.
///
/// ## Errors
/// Returns HTTP 400 only when the body itself is malformed.
#[handler]
async fn decode(req: &mut Request, res: &mut Response) {
    match json_body::<DecodeRequest>(req).await {
        Ok(body) => res.render(Json(DecodeResponse {
            slots: cron_to_slots(&body.cron),
        })),
        Err(err) => err.render(res),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(RECURRENCE_ROUTE_COMPONENT)
        .push(Router::with_path("encode").post(encode))
        .push(Router::with_path("decode").post(decode))
}
