// =============================================================================
// Analysis Pipeline — Validate → Calculate → Evaluate → Assemble
// =============================================================================
//
// The four stages run as plain ordered function composition. Each stage is a
// pure function consuming the previous stage's output and returning a new
// immutable record; there is no shared mutable state and no graph engine —
// the flow is strictly linear.
//
// Only validation can fail. Given a valid input every later stage succeeds,
// so one run either yields a complete `Report` or no report at all.
// =============================================================================

use serde_json::Value;
use tracing::info;

use crate::metrics;
use crate::report::{self, Report, ReportDetail};
use crate::rules::{self, Thresholds};
use crate::validate::{self, ValidationError};

/// Sequential analysis pipeline with an immutable threshold configuration.
///
/// A `Pipeline` is cheap to clone and safe to use from multiple threads;
/// runs are independent and carry no cross-run state.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    thresholds: Thresholds,
}

impl Pipeline {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Run the full pipeline on a raw JSON record, producing the compact
    /// report variant.
    pub fn run(&self, raw: &Value) -> Result<Report, ValidationError> {
        self.run_with_detail(raw, ReportDetail::Compact)
    }

    /// Run the full pipeline, producing the detailed variant (echoed input,
    /// previous-day CAC, generation timestamp).
    pub fn run_detailed(&self, raw: &Value) -> Result<Report, ValidationError> {
        self.run_with_detail(raw, ReportDetail::Detailed)
    }

    fn run_with_detail(&self, raw: &Value, detail: ReportDetail) -> Result<Report, ValidationError> {
        let input = validate::validate(raw)?;
        let metrics = metrics::compute(&input);
        let outcome = rules::evaluate(&metrics, &self.thresholds);
        let report = report::assemble(input, &metrics, outcome, &self.thresholds, detail);

        info!(
            status = %report.profit_loss_status.status,
            alerts = report.summary.total_alerts,
            recommendations = report.summary.total_recommendations,
            "analysis complete"
        );

        Ok(report)
    }
}
