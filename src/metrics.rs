// =============================================================================
// Metric Calculator — derived financial and acquisition metrics
// =============================================================================
//
// Pure transformation from one validated `DailyInput` to a
// `BusinessMetrics` record:
//
//   daily_profit           = revenue - cost
//   current_cac            = cost / customers
//   previous_cac           = prev_cost / prev_customers
//   *_change_percent       = (current - previous) / previous * 100
//   profit_status          = positive iff daily_profit > 0
//
// Zero-guard policy: any division whose denominator is zero or negative
// yields 0.0 — a defined value, never an error or NaN.
// =============================================================================

use tracing::debug;

use crate::types::{BusinessMetrics, DailyInput, ProfitStatus};

/// Cost per acquired customer, or 0.0 when `customers` is not positive.
fn unit_cost(cost: f64, customers: f64) -> f64 {
    if customers > 0.0 {
        cost / customers
    } else {
        0.0
    }
}

/// Signed percentage delta of `current` vs `previous`, or 0.0 when
/// `previous` is not positive.
fn pct_change(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        0.0
    }
}

/// Compute all derived metrics for one day's input.
pub fn compute(input: &DailyInput) -> BusinessMetrics {
    let daily_profit = input.daily_revenue - input.daily_cost;
    let current_cac = unit_cost(input.daily_cost, input.number_of_customers);
    let previous_cac = unit_cost(input.previous_day_cost, input.previous_day_customers);

    let profit_status = if daily_profit > 0.0 {
        ProfitStatus::Positive
    } else {
        ProfitStatus::Negative
    };

    let metrics = BusinessMetrics {
        daily_profit,
        current_cac,
        previous_cac,
        revenue_change_percent: pct_change(input.daily_revenue, input.previous_day_revenue),
        cost_change_percent: pct_change(input.daily_cost, input.previous_day_cost),
        cac_change_percent: pct_change(current_cac, previous_cac),
        profit_status,
    };

    debug!(
        daily_profit = metrics.daily_profit,
        current_cac = metrics.current_cac,
        revenue_change_percent = metrics.revenue_change_percent,
        "metrics computed"
    );

    metrics
}
