//! Project-level roll-up of priced labor categories.

use rust_decimal::Decimal;

use crate::models::{LaborCategoryResult, LaborCategorySummary};

/// Reduces per-category pricing results into project totals.
///
/// An empty slice yields the all-zero summary rather than failing, and
/// the blended profit percentage guards its denominator (billed revenue,
/// i.e. cost plus profit) by substituting zero.
pub fn summarize(results: &[LaborCategoryResult]) -> LaborCategorySummary {
    if results.is_empty() {
        return LaborCategorySummary::empty();
    }

    let count = Decimal::from(results.len() as u64);
    let mut summary = LaborCategorySummary::empty();
    summary.total_categories = results.len();

    let mut base_rate_sum = Decimal::ZERO;
    let mut burdened_rate_sum = Decimal::ZERO;

    for result in results {
        summary.total_hours += result.input.hours;
        summary.total_effective_hours += result.cascade.effective_hours;
        summary.total_base_cost += result.input.base_rate * result.input.hours;
        summary.total_burdened_cost += result.cascade.reference_total_cost;
        summary.total_actual_cost += result.margin.actual_cost;
        summary.total_actual_profit += result.margin.actual_profit;
        base_rate_sum += result.input.base_rate;
        burdened_rate_sum += result.cascade.burdened_rate;
    }

    summary.average_base_rate = base_rate_sum / count;
    summary.average_burdened_rate = burdened_rate_sum / count;

    let billed_revenue = summary.total_actual_cost + summary.total_actual_profit;
    summary.average_actual_profit_percentage = if billed_revenue != Decimal::ZERO {
        summary.total_actual_profit / billed_revenue * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    summary
}
