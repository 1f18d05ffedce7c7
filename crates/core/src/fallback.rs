//! Deterministic fallback report generator.
//!
//! Used whenever the Gemini call fails or returns unparsable output. The
//! whole report is synthesized from a seed hashed out of the input's
//! system name, component list, and database description, so identical
//! inputs reproduce identical reports while different inputs visibly
//! differ.
//!
//! The draw order below is a compatibility contract (see [`crate::seed`]);
//! reordering any two draws changes every value after them.

use crate::input::ArchitectureInput;
use crate::report::{
    AnalysisReport, ComponentHealth, ComponentStatus, EffortLevel, FailureInfo, FailureScenario,
    ImpactLevel, IncidentPoint, Metrics, Recommendation, RiskSlice, Severity, TrafficPoint,
};
use crate::seed::{round1, seed_hash, SeededRng};

/// Generator identity reported in response metadata for fallback reports.
pub const GENERATOR_LABEL: &str = "Gemini AI (Fallback Engine)";

/// Months covered by the historical incident series.
const INCIDENT_MONTHS: [&str; 5] = ["Jan", "Feb", "Mar", "Apr", "May"];

/// Number of points in the traffic simulation series ("0h".."12h").
const TRAFFIC_POINTS: u32 = 7;

/// Hours between adjacent traffic simulation points.
const TRAFFIC_STEP_HOURS: u32 = 2;

/// Substitute `fallback` for an empty derived component name.
fn non_empty<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if name.is_empty() {
        fallback
    } else {
        name
    }
}

/// Synthesize a complete report from the input alone.
///
/// Total over all inputs: performs no I/O and cannot fail. Each call owns
/// its own seed state, so concurrent invocations never interfere.
pub fn generate(input: &ArchitectureInput) -> AnalysisReport {
    let mut rng = SeededRng::new(seed_hash(&input.seed_source()));

    // 1. Overall risk score.
    let risk_score = round1(rng.draw(2.0, 9.0));

    // 2. Component names (no draws).
    let names = input.component_names();
    let primary = names.first().map(String::as_str).unwrap_or("");

    // 3. Single failure scenario.
    let probability = rng.draw(40.0, 90.0).round() as i64;
    let severity = if rng.draw(0.0, 1.0) > 0.5 {
        Severity::Critical
    } else {
        Severity::High
    };
    let mttr_low = rng.draw(30.0, 60.0).round() as i64;
    let mttr_high = rng.draw(60.0, 120.0).round() as i64;
    let affected_users = rng.draw(30.0, 95.0).round() as i64;

    let scenario = FailureScenario {
        rank: 1,
        title: format!(
            "Unexpected failure in {} component",
            non_empty(primary, "Primary")
        ),
        first_failure: non_empty(primary, "Main Service").to_string(),
        impact: "Degraded system performance and partial outage".to_string(),
        probability: format!("~{probability}%"),
        severity,
        mttr: format!("{mttr_low}-{mttr_high}"),
        affected_users: format!("~{affected_users}%"),
        reasons: vec![
            "Resource exhaustion under unexpected load".to_string(),
            "Cascading failure from dependent services".to_string(),
            "Insufficient health check monitoring".to_string(),
        ],
        fixes: vec![
            "Implement automated horizontal scaling".to_string(),
            "Add circuit breaker patterns".to_string(),
            "Enhance observability and alerting".to_string(),
        ],
    };

    // 4. One health entry per derived component name.
    let components: Vec<ComponentHealth> = names
        .iter()
        .map(|name| {
            let score = round1(rng.draw(3.0, 9.0));
            let status_roll = rng.draw(0.0, 1.0);
            // Status is an independent draw, not derived from the score;
            // preserved as observed in the original tool.
            let status = if status_roll > 0.7 {
                ComponentStatus::Critical
            } else if status_roll > 0.4 {
                ComponentStatus::Warning
            } else {
                ComponentStatus::Good
            };
            ComponentHealth {
                name: name.clone(),
                score,
                status,
                issues: rng.draw(1.0, 10.0).floor() as u32,
                dependencies: rng.draw(1.0, 15.0).floor() as u32,
            }
        })
        .collect();

    // 5. Single recommendation referencing the primary component.
    let cost_saving = rng.draw(1000.0, 5000.0).round() as i64;
    let recommendation = Recommendation {
        priority: 1,
        action: format!(
            "Scale {} services horizontally",
            non_empty(primary, "core")
        ),
        impact: ImpactLevel::High,
        effort: EffortLevel::Medium,
        timeframe: "1-2 weeks".to_string(),
        cost_saving: format!("~${cost_saving}/mo"),
    };

    // 6. Traffic simulation, one independent draw pair per point.
    let traffic_simulation: Vec<TrafficPoint> = (0..TRAFFIC_POINTS)
        .map(|i| TrafficPoint {
            time: format!("{}h", i * TRAFFIC_STEP_HOURS),
            normal: rng.draw(100.0, 500.0).round() as u32,
            spike: rng.draw(500.0, 2500.0).round() as u32,
        })
        .collect();

    // 7. Spike legend label.
    let spike_label = format!("{}x Spike", rng.draw(3.0, 8.0).round() as i64);

    // 8. Failure point, anchored to a mid-series traffic sample.
    let failure_index = rng.draw(3.0, 6.0).floor() as usize;
    let failure_rate = rng.draw(1000.0, 3000.0).round() as i64;
    let failure_info = FailureInfo {
        failure_point: format!(
            "{} ({failure_rate} req/s spike)",
            traffic_simulation[failure_index].time
        ),
        failure_component: non_empty(primary, "System").to_string(),
    };

    // 9. Historical incidents, Jan through May.
    let historical_incidents: Vec<IncidentPoint> = INCIDENT_MONTHS
        .iter()
        .map(|month| IncidentPoint {
            month: (*month).to_string(),
            incidents: rng.draw(5.0, 20.0).floor() as u32,
            severity: round1(rng.draw(3.0, 8.0)),
        })
        .collect();

    // 10. Static risk distribution (always sums to 100).
    let risk_distribution = vec![
        RiskSlice {
            category: "Infrastructure".to_string(),
            percentage: 40,
            color: "bg-red-500".to_string(),
        },
        RiskSlice {
            category: "Dependencies".to_string(),
            percentage: 30,
            color: "bg-orange-500".to_string(),
        },
        RiskSlice {
            category: "Architecture".to_string(),
            percentage: 20,
            color: "bg-yellow-500".to_string(),
        },
        RiskSlice {
            category: "Monitoring".to_string(),
            percentage: 10,
            color: "bg-blue-500".to_string(),
        },
    ];

    // 11. Headline metrics. totalScenarios stays 3 even though one
    // scenario is built; preserved as observed in the original tool.
    let total_savings = rng.draw(5.0, 15.0).round() as i64;
    let metrics = Metrics {
        total_scenarios: 3,
        total_spof: rng.draw(1.0, 5.0).floor() as u32,
        avg_mttr: rng.draw(40.0, 90.0).round() as u32,
        projected_downtime: rng.draw(5.0, 25.0).round() as u32,
        total_savings: format!("~${total_savings}K"),
    };

    // 12. Reasoning and assumption text.
    let ai_reasoning = vec![
        format!(
            "Analysis of {} indicates potential bottlenecks in the {} layer.",
            input.system_name, primary
        ),
        "Resource utilization exceeds safety thresholds during peak traffic simulation."
            .to_string(),
        "Single points of failure identified in the current deployment configuration."
            .to_string(),
    ];
    let assumptions = vec![
        "Standard cloud infrastructure SLAs are applicable.".to_string(),
        "Network latency between components is within normal bounds.".to_string(),
        "Current configuration reflects the production environment.".to_string(),
    ];

    AnalysisReport {
        risk_score,
        scenarios: vec![scenario],
        components,
        recommendations: vec![recommendation],
        traffic_simulation,
        spike_label,
        failure_info,
        historical_incidents,
        incident_trend: "Fluctuating reliability patterns detected".to_string(),
        risk_distribution,
        metrics,
        ai_reasoning,
        assumptions,
    }
}
