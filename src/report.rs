// =============================================================================
// Report Assembler — final structured analysis report
// =============================================================================
//
// Combines the derived metrics, rule outcome, and (optionally) the original
// input into the report shape consumed downstream. Percentages and CAC
// figures are rounded to two decimal places for display; the `cac_alert`
// flag is computed on the unrounded value so the strict threshold boundary
// is not distorted by rounding.
//
// Two variants:
//   Compact  — metrics, alerts, recommendations, summary.
//   Detailed — additionally echoes the input record, the previous-day CAC,
//              and an RFC 3339 generation timestamp.
// =============================================================================

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::rules::{RuleOutcome, Thresholds};
use crate::types::{BusinessMetrics, DailyInput, ProfitStatus};

/// How much of the input context the report should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDetail {
    Compact,
    Detailed,
}

/// Profit/loss section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossStatus {
    pub daily_profit: f64,
    pub status: ProfitStatus,
    pub revenue_change_percent: f64,
    pub cost_change_percent: f64,
}

/// Customer-acquisition section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAcquisition {
    pub current_cac: f64,

    /// Only present in the detailed variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_cac: Option<f64>,

    pub cac_change_percent: f64,

    /// True iff the unrounded CAC change exceeds the spike threshold.
    pub cac_alert: bool,
}

/// Counts and provenance for the report as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_alerts: usize,
    pub total_recommendations: usize,

    /// UTC date of the analysis run (YYYY-MM-DD).
    pub analysis_date: String,

    pub engine_version: String,
}

/// Final aggregate produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// RFC 3339 generation timestamp; only present in the detailed variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_timestamp: Option<String>,

    pub profit_loss_status: ProfitLossStatus,
    pub customer_acquisition: CustomerAcquisition,
    pub alerts: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: ReportSummary,

    /// Echo of the validated input; only present in the detailed variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data: Option<DailyInput>,
}

/// Round to two decimal places for display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Assemble the final report from the pipeline's intermediate products.
pub fn assemble(
    input: DailyInput,
    metrics: &BusinessMetrics,
    outcome: RuleOutcome,
    thresholds: &Thresholds,
    detail: ReportDetail,
) -> Report {
    let now = Utc::now();
    let detailed = detail == ReportDetail::Detailed;

    Report {
        analysis_timestamp: detailed.then(|| now.to_rfc3339()),
        profit_loss_status: ProfitLossStatus {
            daily_profit: metrics.daily_profit,
            status: metrics.profit_status,
            revenue_change_percent: round2(metrics.revenue_change_percent),
            cost_change_percent: round2(metrics.cost_change_percent),
        },
        customer_acquisition: CustomerAcquisition {
            current_cac: round2(metrics.current_cac),
            previous_cac: detailed.then(|| round2(metrics.previous_cac)),
            cac_change_percent: round2(metrics.cac_change_percent),
            cac_alert: metrics.cac_change_percent > thresholds.cac_spike_pct,
        },
        summary: ReportSummary {
            total_alerts: outcome.alerts.len(),
            total_recommendations: outcome.recommendations.len(),
            analysis_date: now.format("%Y-%m-%d").to_string(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        },
        alerts: outcome.alerts,
        recommendations: outcome.recommendations,
        input_data: detailed.then_some(input),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> DailyInput {
        DailyInput {
            daily_revenue: 5000.0,
            daily_cost: 3000.0,
            number_of_customers: 50.0,
            previous_day_revenue: 4500.0,
            previous_day_cost: 2500.0,
            previous_day_customers: 45.0,
        }
    }

    fn sample_metrics() -> BusinessMetrics {
        crate::metrics::compute(&sample_input())
    }

    fn sample_outcome() -> RuleOutcome {
        RuleOutcome {
            alerts: vec!["Costs increased significantly".to_string()],
            recommendations: vec![
                "Maintain current profitable operations".to_string(),
                "Review and optimize cost structure".to_string(),
            ],
        }
    }

    #[test]
    fn percentages_are_rounded_to_two_places() {
        let report = assemble(
            sample_input(),
            &sample_metrics(),
            sample_outcome(),
            &Thresholds::default(),
            ReportDetail::Compact,
        );
        // 500 / 4500 * 100 = 11.111... -> 11.11
        assert!((report.profit_loss_status.revenue_change_percent - 11.11).abs() < f64::EPSILON);
        assert!((report.profit_loss_status.cost_change_percent - 20.0).abs() < f64::EPSILON);
        assert!((report.customer_acquisition.current_cac - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_counts_match_lists() {
        let report = assemble(
            sample_input(),
            &sample_metrics(),
            sample_outcome(),
            &Thresholds::default(),
            ReportDetail::Compact,
        );
        assert_eq!(report.summary.total_alerts, report.alerts.len());
        assert_eq!(
            report.summary.total_recommendations,
            report.recommendations.len()
        );
        assert_eq!(report.summary.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn compact_variant_omits_optional_fields() {
        let report = assemble(
            sample_input(),
            &sample_metrics(),
            sample_outcome(),
            &Thresholds::default(),
            ReportDetail::Compact,
        );
        assert!(report.analysis_timestamp.is_none());
        assert!(report.customer_acquisition.previous_cac.is_none());
        assert!(report.input_data.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("analysis_timestamp").is_none());
        assert!(json.get("input_data").is_none());
        assert!(json["customer_acquisition"].get("previous_cac").is_none());
    }

    #[test]
    fn detailed_variant_echoes_input_and_timestamp() {
        let report = assemble(
            sample_input(),
            &sample_metrics(),
            sample_outcome(),
            &Thresholds::default(),
            ReportDetail::Detailed,
        );
        assert!(report.analysis_timestamp.is_some());
        assert_eq!(report.input_data, Some(sample_input()));
        // 2500 / 45 = 55.555... -> 55.56
        assert_eq!(report.customer_acquisition.previous_cac, Some(55.56));
    }

    #[test]
    fn cac_alert_uses_unrounded_value() {
        // A change of 20.004% rounds to 20.0 for display but is still
        // strictly above the threshold.
        let mut metrics = sample_metrics();
        metrics.cac_change_percent = 20.004;
        let report = assemble(
            sample_input(),
            &metrics,
            RuleOutcome::default(),
            &Thresholds::default(),
            ReportDetail::Compact,
        );
        assert!(report.customer_acquisition.cac_alert);
        assert!((report.customer_acquisition.cac_change_percent - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cac_alert_is_strict_at_threshold() {
        let mut metrics = sample_metrics();
        metrics.cac_change_percent = 20.0;
        let report = assemble(
            sample_input(),
            &metrics,
            RuleOutcome::default(),
            &Thresholds::default(),
            ReportDetail::Compact,
        );
        assert!(!report.customer_acquisition.cac_alert);
    }

    #[test]
    fn round2_behaviour() {
        assert!((round2(11.111) - 11.11).abs() < f64::EPSILON);
        assert!((round2(11.115) - 11.12).abs() < f64::EPSILON);
        assert!((round2(-25.005) - (-25.01)).abs() < f64::EPSILON);
        assert!(round2(0.0).abs() < f64::EPSILON);
    }
}
