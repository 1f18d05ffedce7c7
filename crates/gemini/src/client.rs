//! REST client for the Gemini `generateContent` endpoint.

use serde::Deserialize;

use archrisk_core::input::ArchitectureInput;
use archrisk_core::report::AnalysisReport;

use crate::prompt::build_prompt;
use crate::response::parse_report;

/// Default Gemini API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Default model when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Connection settings for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, passed as a query parameter.
    pub api_key: String,
    /// Model name (e.g. `gemini-2.5-flash`).
    pub model: String,
    /// Base URL; overridable for tests.
    pub api_base: String,
}

impl GeminiConfig {
    /// Load from `GEMINI_API_KEY` / `GEMINI_MODEL` environment variables.
    ///
    /// Returns `None` when no API key is configured, in which case the
    /// service runs on the fallback generator alone.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty())?;
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Some(Self {
            api_key,
            model,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }
}

/// HTTP client for a single Gemini model.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

/// Errors from the Gemini layer.
///
/// All of them route the caller to the fallback generator; none are
/// surfaced to the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response contained no candidate text to parse.
    #[error("Gemini response contained no candidate text")]
    EmptyResponse,

    /// The candidate text was not valid report JSON.
    #[error("Failed to parse Gemini output as a report: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Response DTOs (only the fields we read)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Identity label for response metadata, e.g.
    /// `Gemini AI (gemini-2.5-flash)`.
    pub fn generator_label(&self) -> String {
        format!("Gemini AI ({})", self.config.model)
    }

    /// Run a full analysis round trip: prompt, generate, parse.
    ///
    /// One outbound call, no retry. Any transport error, non-2xx status,
    /// empty candidate list, or JSON parse failure is returned as a
    /// [`GeminiError`] for the caller to convert into a fallback report.
    pub async fn analyze(&self, input: &ArchitectureInput) -> Result<AnalysisReport, GeminiError> {
        let text = self.generate(&build_prompt(input)).await?;
        tracing::debug!(chars = text.len(), "Received Gemini candidate text");
        Ok(parse_report(&text)?)
    }

    /// Send a single prompt and return the first candidate's text.
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.api_base, self.config.model, self.config.api_key
        );

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self.client.post(url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(GeminiError::EmptyResponse)?;

        Ok(text)
    }
}
