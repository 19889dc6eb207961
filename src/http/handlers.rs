//! Request handlers: the orchestration layer over the two stores.
//!
//! # Responsibilities
//! - Translate each routed request into store reads/writes
//! - Wrap results in the `{"data": …}` envelope
//! - Keep every count equal to the number of flips with that result
//!
//! # Design Decisions
//! - Creates run inside one exclusive-lock region spanning both stores, so
//!   the flip append and the count increment commit together
//! - Every rejection happens before either store is touched: a failed
//!   create leaves both stores exactly as they were
//! - A flip whose result is not a seeded count label is rejected outright;
//!   counts never grow new keys at request time

use std::collections::BTreeMap;

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::response::Envelope;
use crate::http::server::AppState;
use crate::store::Flip;

/// POST /flips request body.
///
/// A body without a `data` object deserializes with an empty one rather
/// than rejecting the request; the result check below does the judging.
#[derive(Debug, Default, Deserialize)]
pub struct CreateFlipRequest {
    #[serde(default)]
    pub data: CreateFlipData,
}

/// The `data` object of a create request.
#[derive(Debug, Default, Deserialize)]
pub struct CreateFlipData {
    #[serde(default)]
    pub result: Option<String>,
}

/// GET /counts — the full label → tally mapping.
pub async fn list_counts(
    State(state): State<AppState>,
) -> Json<Envelope<BTreeMap<String, u64>>> {
    Json(Envelope::new(state.stores().counts.all().clone()))
}

/// GET /counts/{count_id} — one tally by label.
pub async fn get_count(
    State(state): State<AppState>,
    Path(count_id): Path<String>,
) -> Result<Json<Envelope<u64>>, ApiError> {
    let tally = state
        .stores()
        .counts
        .get(&count_id)
        .ok_or(ApiError::CountNotFound(count_id))?;
    Ok(Json(Envelope::new(tally)))
}

/// GET /flips — all flips in insertion order.
pub async fn list_flips(State(state): State<AppState>) -> Json<Envelope<Vec<Flip>>> {
    Json(Envelope::new(state.stores().flips.list_all().to_vec()))
}

/// GET /flips/{flip_id} — one flip by numeric id.
///
/// The path parameter is compared numerically; input that does not parse as
/// an id cannot match anything and reports not-found with the raw input.
pub async fn get_flip(
    State(state): State<AppState>,
    Path(flip_id): Path<String>,
) -> Result<Json<Envelope<Flip>>, ApiError> {
    let found = flip_id
        .parse::<u64>()
        .ok()
        .and_then(|id| state.stores().flips.get_by_id(id).cloned());

    match found {
        Some(flip) => Ok(Json(Envelope::new(flip))),
        None => Err(ApiError::FlipNotFound(flip_id)),
    }
}

/// POST /flips — record a flip and bump its tally, atomically.
pub async fn create_flip(
    State(state): State<AppState>,
    Json(payload): Json<CreateFlipRequest>,
) -> Result<(StatusCode, Json<Envelope<Flip>>), ApiError> {
    let result = payload
        .data
        .result
        .filter(|r| !r.is_empty())
        .ok_or(ApiError::MissingResult)?;

    let mut stores = state.stores_mut();
    if !stores.counts.contains(&result) {
        return Err(ApiError::UnseededResult(result));
    }

    let flip = stores.flips.create(&result);
    let tally = stores.counts.increment(&result);
    debug_assert!(tally.is_some(), "label presence checked above");

    tracing::debug!(id = flip.id, result = %flip.result, "Flip created");
    Ok((StatusCode::CREATED, Json(Envelope::new(flip))))
}

/// Fallback for any request no route matched.
pub async fn route_fallback(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound(uri.to_string())
}
