//! Wire-shape of an analysis report.
//!
//! Both generation paths produce this exact shape: the Gemini response is
//! deserialized into it, and the fallback generator constructs it directly.
//! Field names follow the frontend's camelCase contract.

use serde::{Deserialize, Serialize};

/// Confidence label attached to fallback-generated reports.
pub const FALLBACK_CONFIDENCE: &str = "Low (Fallback)";

/// Risk score at or above which a model-generated report is labeled
/// high-confidence.
pub const HIGH_CONFIDENCE_RISK_SCORE: f64 = 7.0;

/// Complete analysis report, minus the response metadata envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub risk_score: f64,
    pub scenarios: Vec<FailureScenario>,
    pub components: Vec<ComponentHealth>,
    pub recommendations: Vec<Recommendation>,
    pub traffic_simulation: Vec<TrafficPoint>,
    pub spike_label: String,
    pub failure_info: FailureInfo,
    pub historical_incidents: Vec<IncidentPoint>,
    pub incident_trend: String,
    pub risk_distribution: Vec<RiskSlice>,
    pub metrics: Metrics,
    pub ai_reasoning: Vec<String>,
    pub assumptions: Vec<String>,
}

/// A ranked failure scenario.
///
/// `probability` and `affected_users` are formatted percentages
/// (`"~62%"`); `mttr` is a `"low-high"` minute range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureScenario {
    pub rank: u32,
    pub title: String,
    pub first_failure: String,
    pub impact: String,
    pub probability: String,
    pub severity: Severity,
    pub mttr: String,
    pub affected_users: String,
    pub reasons: Vec<String>,
    pub fixes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
}

/// Per-component health entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub score: f64,
    pub status: ComponentStatus,
    pub issues: u32,
    pub dependencies: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Critical,
    Warning,
    Good,
    Missing,
}

/// A prioritized remediation recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: u32,
    pub action: String,
    pub impact: ImpactLevel,
    pub effort: EffortLevel,
    pub timeframe: String,
    pub cost_saving: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffortLevel {
    High,
    Medium,
    Low,
}

/// One point on the traffic simulation chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficPoint {
    pub time: String,
    pub normal: u32,
    pub spike: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureInfo {
    pub failure_point: String,
    pub failure_component: String,
}

/// One month of historical incident data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentPoint {
    pub month: String,
    pub incidents: u32,
    pub severity: f64,
}

/// One slice of the risk distribution chart. `color` is a frontend CSS
/// class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSlice {
    pub category: String,
    pub percentage: u32,
    pub color: String,
}

/// Headline metrics shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_scenarios: u32,
    #[serde(rename = "totalSPOF")]
    pub total_spof: u32,
    #[serde(rename = "avgMTTR")]
    pub avg_mttr: u32,
    pub projected_downtime: u32,
    pub total_savings: String,
}

/// Response metadata wrapped around every report, regardless of which
/// generation path produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_by: String,
    pub timestamp: String,
    pub analysis_id: String,
    pub confidence_level: String,
    pub system_name: String,
}

impl ReportMetadata {
    /// Build metadata for a freshly generated report.
    ///
    /// The timestamp is `YYYY-MM-DD HH:MM:SS UTC` and the analysis ID is
    /// `RAS-<millisecond epoch>`.
    pub fn new(generated_by: String, confidence_level: String, system_name: String) -> Self {
        let now = chrono::Utc::now();
        Self {
            generated_by,
            timestamp: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            analysis_id: format!("RAS-{}", now.timestamp_millis()),
            confidence_level,
            system_name,
        }
    }
}

/// Confidence label for a model-generated report, derived from its risk
/// score. Fallback reports use [`FALLBACK_CONFIDENCE`] instead.
pub fn confidence_label(risk_score: f64) -> &'static str {
    if risk_score >= HIGH_CONFIDENCE_RISK_SCORE {
        "High"
    } else {
        "Medium"
    }
}

/// Full response body: metadata plus the flattened report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub metadata: ReportMetadata,
    #[serde(flatten)]
    pub report: AnalysisReport,
}
