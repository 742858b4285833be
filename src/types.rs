// =============================================================================
// Shared types used across the bizpulse analysis pipeline
// =============================================================================

use serde::{Deserialize, Serialize};

/// One day of raw business figures together with the prior day's counterparts.
///
/// This is the single external input to the pipeline. It is validated once
/// (see `validate`) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyInput {
    pub daily_revenue: f64,
    pub daily_cost: f64,
    pub number_of_customers: f64,
    pub previous_day_revenue: f64,
    pub previous_day_cost: f64,
    pub previous_day_customers: f64,
}

/// Whether the day closed with a profit.
///
/// Zero profit counts as `Negative` — only a strictly positive daily profit
/// is classified `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitStatus {
    Positive,
    Negative,
}

impl std::fmt::Display for ProfitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// Metrics derived from a `DailyInput`.
///
/// All values are unrounded; display rounding happens in the report
/// assembler. Every division is zero-guarded upstream (a denominator that is
/// zero or negative yields 0.0, never NaN).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessMetrics {
    /// Revenue minus cost for the day.
    pub daily_profit: f64,

    /// Customer acquisition cost for the day (cost / customers).
    pub current_cac: f64,

    /// Customer acquisition cost for the prior day.
    pub previous_cac: f64,

    /// Signed revenue delta vs the prior day, in percent.
    pub revenue_change_percent: f64,

    /// Signed cost delta vs the prior day, in percent.
    pub cost_change_percent: f64,

    /// Signed CAC delta vs the prior day, in percent.
    pub cac_change_percent: f64,

    pub profit_status: ProfitStatus,
}
