//! Passphrase gate for the dashboard
//!
//! The dashboard is single tenant and sits behind one shared passphrase.
//! This is a soft gate for the UI, not an authentication scheme.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GateRequest {
    pub passphrase: String,
}

#[derive(Debug, Serialize)]
pub struct GateResponse {
    pub unlocked: bool,
}

/// Check the submitted passphrase against the configured one
pub async fn unlock(
    State(state): State<AppState>,
    Json(input): Json<GateRequest>,
) -> AppResult<Json<GateResponse>> {
    let unlocked = input.passphrase == state.config.gate.passphrase;
    if !unlocked {
        tracing::warn!("rejected gate unlock attempt");
    }
    Ok(Json(GateResponse { unlocked }))
}
