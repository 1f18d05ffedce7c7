//! Prompt construction for the risk analysis request.
//!
//! The prompt carries strict formatting rules, the nine architecture
//! fields, the numbered requirement sections, and a JSON skeleton of the
//! expected response. The skeleton's field names must stay in sync with
//! the serde names on [`archrisk_core::report::AnalysisReport`].

use archrisk_core::input::ArchitectureInput;

const RULES: &str = "\
CRITICAL RULES:
- Respond with ONLY valid JSON
- No markdown, no comments, no explanations outside JSON
- Use MTTR strictly in \"XX-YY\" numeric format (e.g., \"45-90\")
- Use percentages with ~ prefix (e.g., \"~87%\")
- All numerical values should be realistic and vary based on input
- NO hardcoded or preset values - each response must be unique
- Use decimals for scores (e.g., 7.3, 8.5, not 7, 8)
- No trailing commas in JSON
- Generate realistic, non-round numbers
- Include specific technical details for this architecture

You are a senior system reliability engineer. Analyze this architecture and provide a detailed risk assessment.";

const SECTIONS: &str = "\
Please analyze and provide:

1. Overall risk score (0-10, with decimal, where 10 is highest risk)

2. Top 3 failure scenarios with:
   - rank: number (1-3)
   - title: specific failure scenario name
   - firstFailure: which component fails first
   - impact: what happens
   - probability: string with ~ and % (e.g., \"~87\")
   - severity: \"Critical\" or \"High\"
   - mttr: string in \"XX-YY\" format (minutes)
   - affectedUsers: string with ~ and % (e.g., \"~85%\")
   - reasons: array of 3-4 specific reasons why it happens
   - fixes: array of 3-4 specific solutions

3. Component health scores (0-10 with decimal for each):
   - name: component name
   - score: decimal number 0-10
   - status: \"critical\" (score < 5), \"warning\" (5-7), \"good\" (> 7), or \"missing\" (score 0)
   - issues: number of issues
   - dependencies: number of dependencies

4. Top 4 recommendations with:
   - priority: number (1-4)
   - action: specific action
   - impact: \"High\" or \"Medium\"
   - effort: \"High\", \"Medium\", or \"Low\"
   - timeframe: string (e.g., \"1-2 weeks\")
   - costSaving: string with ~ and $ (e.g., \"~$2,450/mo\")

5. Traffic simulation data (7 data points) with:
   - time: string in format \"Xh\" (e.g., \"0h\", \"2h\", \"4h\", \"6h\", \"8h\", \"10h\", \"12h\")
   - normal: number (normal traffic, varying realistically)
   - spike: number (peak/spike traffic, varying realistically, should cause failure at some point)
   - spikeLabel: string for the legend (e.g., \"3x Spike\", \"10x Burst\")

6. Failure information:
   - failurePoint: string describing when system fails. THIS MUST correspond to the 'time' in trafficSimulation where the spike is highest or where the system would realistically fail based on the components.
   - failureComponent: which component fails at that point

7. Historical incidents (5 months) with:
   - month: string (e.g., \"Jan\", \"Feb\", \"Mar\", \"Apr\", \"May\")
   - incidents: number (varying realistically, 8-25 range)
   - severity: decimal number (4.0-9.0 range)
   - trend: string describing the trend

8. Risk distribution with:
   - category: string (\"Infrastructure\", \"Dependencies\", \"Architecture\", \"Monitoring\")
   - percentage: number (total must equal 100)
   - color: css color class (\"bg-red-500\", \"bg-orange-500\", \"bg-yellow-500\", \"bg-blue-500\")

9. Key metrics:
   - totalScenarios: number
   - totalSPOF: number (single points of failure)
   - avgMTTR: number (average of scenario MTTRs)
   - projectedDowntime: number (hours per month)
   - totalSavings: string with ~ and $/K

10. AI Reasoning & Assumptions:
   - reasoning: array of 4-6 specific technical reasoning points for this specific architecture
   - assumptions: array of 5-7 specific assumptions made during this analysis";

const RESPONSE_SKELETON: &str = r#"Respond in valid JSON format only:
{
  "riskScore": decimal_number,
  "scenarios": [
    {
      "rank": number,
      "title": "string",
      "firstFailure": "string",
      "impact": "string",
      "probability": "~XX",
      "severity": "Critical/High",
      "mttr": "XX-YY",
      "affectedUsers": "~XX%",
      "reasons": ["string", "string", "string"],
      "fixes": ["string", "string", "string"]
    }
  ],
  "components": [
    {
      "name": "string",
      "score": decimal_number,
      "status": "critical/warning/good/missing",
      "issues": number,
      "dependencies": number
    }
  ],
  "recommendations": [
    {
      "priority": number,
      "action": "string",
      "impact": "High/Medium",
      "effort": "High/Medium/Low",
      "timeframe": "string",
      "costSaving": "~$X,XXX/mo"
    }
  ],
  "trafficSimulation": [
    {
      "time": "Xh",
      "normal": number,
      "spike": number
    }
  ],
  "spikeLabel": "string",
  "failureInfo": {
    "failurePoint": "string",
    "failureComponent": "string"
  },
  "historicalIncidents": [
    {
      "month": "string",
      "incidents": number,
      "severity": decimal_number
    }
  ],
  "incidentTrend": "string",
  "riskDistribution": [
    {
      "category": "string",
      "percentage": number,
      "color": "bg-red-500/bg-orange-500/bg-yellow-500/bg-blue-500"
    }
  ],
  "metrics": {
    "totalScenarios": number,
    "totalSPOF": number,
    "avgMTTR": number,
    "projectedDowntime": number,
    "totalSavings": "~$X,XXX"
  },
  "aiReasoning": ["string"],
  "assumptions": ["string"]
}"#;

/// Render the full analysis prompt for one input record.
pub fn build_prompt(input: &ArchitectureInput) -> String {
    let details = format!(
        "System Architecture Details:
- System Name: {}
- Components: {}
- Database: {}
- Caching: {}
- Message Queue: {}
- External APIs: {}
- Traffic Load: {}
- Auto-Scaling: {}
- Redundancy: {}",
        input.system_name,
        input.components,
        input.databases,
        input.caching,
        input.message_queue,
        input.external_apis,
        input.traffic_load,
        input.scaling,
        input.redundancy,
    );

    format!("{RULES}\n\n{details}\n\n{SECTIONS}\n\n{RESPONSE_SKELETON}")
}
