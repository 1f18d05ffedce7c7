//! Handler for the analysis endpoint: orchestrates the Gemini call and
//! the deterministic fallback.

use axum::extract::State;
use axum::Json;

use archrisk_core::fallback;
use archrisk_core::input::ArchitectureInput;
use archrisk_core::report::{
    confidence_label, AnalysisReport, AnalysisResponse, ReportMetadata, FALLBACK_CONFIDENCE,
};

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /analyze — run an architecture risk analysis
// ---------------------------------------------------------------------------

/// Analyze a submitted architecture description.
///
/// Delegates to Gemini when a client is configured; any failure there
/// (transport, non-2xx, unparsable output) is converted into a successful
/// fallback report rather than surfaced as an error. The only failure mode
/// visible to callers is input validation.
pub async fn analyze(
    State(state): State<AppState>,
    Json(input): Json<ArchitectureInput>,
) -> AppResult<Json<AnalysisResponse>> {
    input.validate()?;

    tracing::info!(system_name = %input.system_name, "Received analysis request");

    let (report, metadata) = match &state.gemini {
        Some(client) => match client.analyze(&input).await {
            Ok(report) => {
                tracing::info!(risk_score = report.risk_score, "Gemini analysis complete");
                let metadata = ReportMetadata::new(
                    client.generator_label(),
                    confidence_label(report.risk_score).to_string(),
                    input.system_name.clone(),
                );
                (report, metadata)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Gemini analysis failed, using fallback generator");
                fallback_report(&input)
            }
        },
        None => {
            tracing::debug!("No Gemini client configured, using fallback generator");
            fallback_report(&input)
        }
    };

    tracing::info!(
        analysis_id = %metadata.analysis_id,
        risk_score = report.risk_score,
        scenarios = report.scenarios.len(),
        recommendations = report.recommendations.len(),
        "Analysis complete",
    );

    Ok(Json(AnalysisResponse { metadata, report }))
}

/// Build a fallback report plus its metadata envelope.
fn fallback_report(input: &ArchitectureInput) -> (AnalysisReport, ReportMetadata) {
    let report = fallback::generate(input);
    let metadata = ReportMetadata::new(
        fallback::GENERATOR_LABEL.to_string(),
        FALLBACK_CONFIDENCE.to_string(),
        input.system_name.clone(),
    );
    (report, metadata)
}
