//! Post-processing of the model's free-text reply.

use archrisk_core::report::AnalysisReport;

/// Strip Markdown code-fence markers from the model's reply.
///
/// Gemini frequently wraps its JSON in ```json fences despite the prompt's
/// instructions; remove every fence marker and trim the remainder.
pub fn strip_markdown_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse the model's reply into a report, tolerating code fences.
pub fn parse_report(text: &str) -> Result<AnalysisReport, serde_json::Error> {
    serde_json::from_str(&strip_markdown_fences(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_REPORT: &str = r#"{
        "riskScore": 6.4,
        "scenarios": [{
            "rank": 1,
            "title": "Database saturation",
            "firstFailure": "DB",
            "impact": "Writes stall",
            "probability": "~71%",
            "severity": "High",
            "mttr": "45-90",
            "affectedUsers": "~60%",
            "reasons": ["No read replicas"],
            "fixes": ["Add a replica"]
        }],
        "components": [{
            "name": "DB",
            "score": 4.2,
            "status": "critical",
            "issues": 3,
            "dependencies": 5
        }],
        "recommendations": [{
            "priority": 1,
            "action": "Add a read replica",
            "impact": "High",
            "effort": "Medium",
            "timeframe": "1-2 weeks",
            "costSaving": "~$1,200/mo"
        }],
        "trafficSimulation": [
            {"time": "0h", "normal": 200, "spike": 900}
        ],
        "spikeLabel": "4x Spike",
        "failureInfo": {"failurePoint": "8h (2100 req/s spike)", "failureComponent": "DB"},
        "historicalIncidents": [
            {"month": "Jan", "incidents": 12, "severity": 5.5}
        ],
        "incidentTrend": "Rising",
        "riskDistribution": [
            {"category": "Infrastructure", "percentage": 100, "color": "bg-red-500"}
        ],
        "metrics": {
            "totalScenarios": 3,
            "totalSPOF": 2,
            "avgMTTR": 67,
            "projectedDowntime": 11,
            "totalSavings": "~$8K"
        },
        "aiReasoning": ["Single write path"],
        "assumptions": ["Cloud SLAs apply"]
    }"#;

    #[test]
    fn strips_json_fence_pair() {
        let fenced = format!("```json\n{MINIMAL_REPORT}\n```");
        assert_eq!(strip_markdown_fences(&fenced), MINIMAL_REPORT.trim());
    }

    #[test]
    fn strips_bare_fences() {
        let fenced = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_markdown_fences(fenced), "{\"a\": 1}");
    }

    #[test]
    fn leaves_unfenced_text_untouched() {
        assert_eq!(strip_markdown_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn parses_fenced_report() {
        let fenced = format!("```json\n{MINIMAL_REPORT}\n```");
        let report = parse_report(&fenced).unwrap();
        assert_eq!(report.risk_score, 6.4);
        assert_eq!(report.scenarios.len(), 1);
        assert_eq!(report.components[0].name, "DB");
        assert_eq!(report.metrics.total_spof, 2);
    }

    #[test]
    fn parses_unfenced_report() {
        assert!(parse_report(MINIMAL_REPORT).is_ok());
    }

    #[test]
    fn rejects_prose_reply() {
        let err = parse_report("I am sorry, I cannot analyze this architecture.");
        assert!(err.is_err());
    }
}
