// =============================================================================
// Rule Engine — fixed-order threshold rules over the derived metrics
// =============================================================================
//
// Five independent rules, evaluated in a fixed order. Each may append to the
// alert list, the recommendation list, or both; no rule short-circuits the
// ones after it. Output order therefore always reflects rule order.
//
// Rules:
//   1. Profit/Loss      — negative profit alerts and asks for cost cuts,
//                         otherwise recommends staying the course.
//   2. CAC spike        — CAC rose more than the threshold vs yesterday.
//   3. Revenue trend    — strong growth or significant decline (two-sided,
//                         mutually exclusive branches).
//   4. Cost creep       — costs rose more than the threshold.
//   5. Profitable growth — revenue up and profit positive: scale.
//
// All comparisons are strict inequalities.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::types::BusinessMetrics;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_cac_spike_pct() -> f64 {
    20.0
}

fn default_revenue_growth_pct() -> f64 {
    10.0
}

fn default_revenue_decline_pct() -> f64 {
    10.0
}

fn default_cost_increase_pct() -> f64 {
    15.0
}

// =============================================================================
// Thresholds
// =============================================================================

/// Named rule thresholds, all in percent.
///
/// Every field has a serde default so that older JSON files missing new
/// fields will still deserialise correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// CAC growth above this fires the CAC spike alert (rule 2).
    #[serde(default = "default_cac_spike_pct")]
    pub cac_spike_pct: f64,

    /// Revenue growth above this recommends more ad spend (rule 3).
    #[serde(default = "default_revenue_growth_pct")]
    pub revenue_growth_pct: f64,

    /// Revenue decline beyond this (change < -threshold) fires the decline
    /// alert (rule 3).
    #[serde(default = "default_revenue_decline_pct")]
    pub revenue_decline_pct: f64,

    /// Cost growth above this fires the cost alert (rule 4).
    #[serde(default = "default_cost_increase_pct")]
    pub cost_increase_pct: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cac_spike_pct: default_cac_spike_pct(),
            revenue_growth_pct: default_revenue_growth_pct(),
            revenue_decline_pct: default_revenue_decline_pct(),
            cost_increase_pct: default_cost_increase_pct(),
        }
    }
}

impl Thresholds {
    /// Load thresholds from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read thresholds from {}", path.display()))?;

        let thresholds: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse thresholds from {}", path.display()))?;

        info!(path = %path.display(), "thresholds loaded");
        Ok(thresholds)
    }
}

// =============================================================================
// Rule evaluation
// =============================================================================

/// Ordered alerts and recommendations produced by one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub alerts: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Run every rule against `metrics` and collect alerts and recommendations.
pub fn evaluate(metrics: &BusinessMetrics, thresholds: &Thresholds) -> RuleOutcome {
    let mut out = RuleOutcome::default();

    // ── Rule 1: Profit/Loss ──────────────────────────────────────────────
    if metrics.daily_profit < 0.0 {
        out.alerts.push("Daily profit is negative".to_string());
        out.recommendations
            .push("Reduce operational costs to improve profitability".to_string());
        debug!(daily_profit = metrics.daily_profit, "rule 1: loss");
    } else {
        out.recommendations
            .push("Maintain current profitable operations".to_string());
    }

    // ── Rule 2: CAC spike ────────────────────────────────────────────────
    if metrics.cac_change_percent > thresholds.cac_spike_pct {
        out.alerts.push(format!(
            "CAC increased by {:.1}% (>{:.0}% threshold)",
            metrics.cac_change_percent, thresholds.cac_spike_pct
        ));
        out.recommendations.push(
            "Review marketing campaigns and optimize customer acquisition strategies".to_string(),
        );
        debug!(
            cac_change_percent = metrics.cac_change_percent,
            "rule 2: CAC spike"
        );
    }

    // ── Rule 3: Revenue trend ────────────────────────────────────────────
    if metrics.revenue_change_percent > thresholds.revenue_growth_pct {
        out.recommendations
            .push("Strong revenue growth detected - consider increasing advertising budget".to_string());
    } else if metrics.revenue_change_percent < -thresholds.revenue_decline_pct {
        out.alerts.push("Revenue declined significantly".to_string());
        out.recommendations
            .push("Investigate market conditions and adjust sales strategy".to_string());
        debug!(
            revenue_change_percent = metrics.revenue_change_percent,
            "rule 3: revenue decline"
        );
    }

    // ── Rule 4: Cost creep ───────────────────────────────────────────────
    if metrics.cost_change_percent > thresholds.cost_increase_pct {
        out.alerts.push("Costs increased significantly".to_string());
        out.recommendations
            .push("Review and optimize cost structure".to_string());
        debug!(
            cost_change_percent = metrics.cost_change_percent,
            "rule 4: cost creep"
        );
    }

    // ── Rule 5: Profitable growth ────────────────────────────────────────
    if metrics.revenue_change_percent > 0.0 && metrics.daily_profit > 0.0 {
        out.recommendations
            .push("Business is growing profitably - consider scaling operations".to_string());
    }

    info!(
        alerts = out.alerts.len(),
        recommendations = out.recommendations.len(),
        "rules evaluated"
    );

    out
}
