use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether a Gemini API key is configured. When false, all analyses
    /// are served by the fallback generator.
    pub gemini_configured: bool,
}

/// GET /health -- returns service status and Gemini availability.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        gemini_configured: state.gemini.is_some(),
    })
}

/// GET / -- liveness message for quick manual checks.
async fn root_message() -> Json<serde_json::Value> {
    Json(json!({ "message": "Backend is running with Gemini AI!" }))
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root_message))
        .route("/health", get(health_check))
}
