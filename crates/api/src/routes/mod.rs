pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /analyze    run an architecture risk analysis (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/analyze", post(handlers::analysis::analyze))
}
