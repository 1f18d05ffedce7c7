use std::sync::Arc;

use archrisk_gemini::GeminiClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Gemini client, or `None` when no API key is configured. Without a
    /// client every analysis request is served by the fallback generator.
    pub gemini: Option<Arc<GeminiClient>>,
}
