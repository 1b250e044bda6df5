//! Liveness endpoint.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::AppResult;
use crate::models::HealthResponse;

/// `GET /api/health`: reports the version and pings the store.
pub async fn health_handler(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    state.store.ping().await?;
    Ok(Json(HealthResponse {
        status: "ok".into(),
        version: chat2site_core::version().into(),
        storage: state.store.backend().into(),
    }))
}
