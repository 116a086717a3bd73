//! Explicit persistence flush endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppResult;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlushResponse {
    pub flushed_collections: usize,
}

/// Drain the pending-write queue and wait for every file write to finish
pub async fn flush(State(state): State<AppState>) -> AppResult<Json<FlushResponse>> {
    let flushed = state.flush().await?;
    Ok(Json(FlushResponse {
        flushed_collections: flushed,
    }))
}
