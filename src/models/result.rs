//! Pricing result models for the labor pricing engine.
//!
//! This module contains the [`LaborCategoryResult`] snapshot and its two
//! breakdown sub-objects, the project-level [`LaborCategorySummary`], and
//! the [`PricingRun`] envelope handed to the export collaborator.
//!
//! The government-compliant reference model ([`CascadeBreakdown`]) and the
//! company-internal margin model ([`MarginBreakdown`]) are kept as separate
//! sub-objects joined only for display and discount purposes; the negotiated
//! final rate is never derived from the burdened rate.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LaborCategoryInput;

/// The government-compliant burdened-rate cascade for one category.
///
/// Field names are a stable contract with the export collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadeBreakdown {
    /// Hours scaled by FTE percentage.
    pub effective_hours: Decimal,
    /// The fixed premium for the category's clearance level.
    pub clearance_premium: Decimal,
    /// Base rate inflated by the clearance premium.
    pub clearance_adjusted_rate: Decimal,
    /// Overhead dollars over the period of performance.
    pub overhead_amount: Decimal,
    /// G&A dollars, applied on top of overhead.
    pub ga_amount: Decimal,
    /// Fee dollars, applied on top of overhead and G&A.
    pub fee_amount: Decimal,
    /// The fully burdened hourly reference rate.
    pub burdened_rate: Decimal,
    /// Reference cost: burdened rate times effective hours.
    pub reference_total_cost: Decimal,
}

/// The company-internal margin model for one category.
///
/// Built on the pay-band salary and the negotiated final rate, never on
/// the burdened reference rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginBreakdown {
    /// The company role's pay-band salary, treated as an annualized proxy.
    pub annual_salary: Decimal,
    /// Employer-side cost loading on the salary.
    pub wrap_amount: Decimal,
    /// Minimum profit layered on salary plus wrap.
    pub minimum_profit_amount: Decimal,
    /// Salary plus wrap plus minimum profit.
    pub minimum_annual_revenue: Decimal,
    /// The minimum viable hourly rate (zero when effective hours are zero).
    pub company_minimum_rate: Decimal,
    /// Billed cost: final rate times effective hours times capacity.
    pub billed_total_cost: Decimal,
    /// Real delivery cost: salary plus wrap, times capacity.
    pub actual_cost: Decimal,
    /// Billed cost minus actual cost.
    pub actual_profit: Decimal,
    /// Profit over actual cost, as a percentage (zero when cost is zero).
    pub actual_profit_percentage: Decimal,
    /// Discount of the final rate against the catalog LCAT rate, as a
    /// percentage. Positive when undercutting the catalog, negative when
    /// exceeding it; zero when no catalog rate applies.
    pub final_rate_discount: Decimal,
}

/// The complete priced snapshot for one labor category.
///
/// Recomputed in full on every input or settings change; cached for
/// display only, never persisted as authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborCategoryResult {
    /// The input the snapshot was computed from.
    pub input: LaborCategoryInput,
    /// The government-compliant reference cascade.
    pub cascade: CascadeBreakdown,
    /// The company-internal margin reconciliation.
    pub margin: MarginBreakdown,
    /// Version of the system settings the margin was computed under.
    pub settings_version: u64,
}

/// Project-level roll-up of priced labor categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborCategorySummary {
    /// Number of categories priced.
    pub total_categories: usize,
    /// Sum of contracted hours.
    pub total_hours: Decimal,
    /// Sum of FTE-scaled hours.
    pub total_effective_hours: Decimal,
    /// Sum of base rate times contracted hours.
    pub total_base_cost: Decimal,
    /// Sum of reference total cost.
    pub total_burdened_cost: Decimal,
    /// Mean base rate over all categories.
    pub average_base_rate: Decimal,
    /// Mean burdened rate over all categories.
    pub average_burdened_rate: Decimal,
    /// Sum of actual delivery cost.
    pub total_actual_cost: Decimal,
    /// Sum of actual profit.
    pub total_actual_profit: Decimal,
    /// Profit over billed revenue (cost plus profit), as a percentage.
    pub average_actual_profit_percentage: Decimal,
}

impl LaborCategorySummary {
    /// Returns the all-zero summary reported for an empty project.
    pub fn empty() -> Self {
        Self {
            total_categories: 0,
            total_hours: Decimal::ZERO,
            total_effective_hours: Decimal::ZERO,
            total_base_cost: Decimal::ZERO,
            total_burdened_cost: Decimal::ZERO,
            average_base_rate: Decimal::ZERO,
            average_burdened_rate: Decimal::ZERO,
            total_actual_cost: Decimal::ZERO,
            total_actual_profit: Decimal::ZERO,
            average_actual_profit_percentage: Decimal::ZERO,
        }
    }
}

/// The envelope for one complete pricing pass over a project.
///
/// Consumed verbatim by the export/report collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRun {
    /// Unique identifier for this pricing pass.
    pub run_id: Uuid,
    /// When the pass was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the system settings used for every category in the pass.
    pub settings_version: u64,
    /// Per-category priced snapshots.
    pub results: Vec<LaborCategoryResult>,
    /// Project-level totals.
    pub summary: LaborCategorySummary,
}
