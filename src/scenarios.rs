// =============================================================================
// Built-in demo scenarios and the batch report aggregate
// =============================================================================
//
// Three canonical business situations exercised by the demo CLI and the
// tests: profitable growth, a loss-making day, and a CAC blow-out. Plus the
// default single-run sample.
// =============================================================================

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::report::Report;

/// Default record analysed when the CLI is run without arguments.
pub fn sample_input() -> Value {
    json!({
        "daily_revenue": 5000,
        "daily_cost": 3000,
        "number_of_customers": 50,
        "previous_day_revenue": 4500,
        "previous_day_cost": 2500,
        "previous_day_customers": 45
    })
}

/// Named demo scenarios, in presentation order.
pub fn all() -> Vec<(&'static str, Value)> {
    vec![
        (
            "profitable_growth",
            json!({
                "daily_revenue": 8000,
                "daily_cost": 5000,
                "number_of_customers": 80,
                "previous_day_revenue": 7000,
                "previous_day_cost": 4500,
                "previous_day_customers": 75
            }),
        ),
        (
            "loss_scenario",
            json!({
                "daily_revenue": 3000,
                "daily_cost": 4500,
                "number_of_customers": 30,
                "previous_day_revenue": 4000,
                "previous_day_cost": 3500,
                "previous_day_customers": 40
            }),
        ),
        (
            "high_cac_alert",
            json!({
                "daily_revenue": 6000,
                "daily_cost": 5000,
                "number_of_customers": 25,
                "previous_day_revenue": 6000,
                "previous_day_cost": 3000,
                "previous_day_customers": 60
            }),
        ),
    ]
}

/// Header for a batch run over several scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_scenarios: usize,
    pub analysis_timestamp: String,
    pub scenarios_analyzed: Vec<String>,
}

/// Combined document produced by a batch run: one report per scenario plus
/// an overall summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedReport {
    pub analysis_summary: BatchSummary,
    pub results: Vec<ScenarioResult>,
}

/// One named scenario's report within a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: String,
    pub report: Report,
}

impl CombinedReport {
    pub fn new(results: Vec<ScenarioResult>) -> Self {
        Self {
            analysis_summary: BatchSummary {
                total_scenarios: results.len(),
                analysis_timestamp: Utc::now().to_rfc3339(),
                scenarios_analyzed: results.iter().map(|r| r.scenario.clone()).collect(),
            },
            results,
        }
    }
}
