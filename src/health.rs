use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// `ready` once a refresh has completed, `empty` before that.
    pub snapshot: String,
    pub total_jobs: usize,
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshot = state.store.read();
    let ready = snapshot.is_initialized();
    debug!(ready, "Health check");

    Json(HealthResponse {
        status: "OK".to_string(),
        snapshot: if ready { "ready" } else { "empty" }.to_string(),
        total_jobs: snapshot.len(),
    })
}
