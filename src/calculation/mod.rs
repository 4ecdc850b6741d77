//! Calculation engine for the labor pricing system.
//!
//! This module contains the pure arithmetic layers (the burden cascade,
//! the margin model, escalation projection, and the project roll-up)
//! plus the driver that joins them into per-category snapshots and a
//! [`PricingRun`] envelope for the export collaborator.

mod cascade;
mod escalation;
mod margin;
mod summary;

pub use cascade::{cascade, PricingSettings};
pub use escalation::{project, project_with_vehicle, EscalationProjection, YearlyRate};
pub use margin::margin;
pub use summary::summarize;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{LaborCategoryInput, LaborCategoryResult, PricingRun};
use crate::settings::SystemSettings;

/// Prices a single labor category into an immutable result snapshot.
///
/// The burdened reference cascade and the company margin model are
/// computed independently; the negotiated final rate flows only into the
/// margin side and is never reconciled with the burdened rate. Callers
/// recompute the snapshot on every input or settings change.
pub fn price_labor_category(
    input: &LaborCategoryInput,
    pricing: PricingSettings,
    settings: &SystemSettings,
) -> LaborCategoryResult {
    let cascade_breakdown = cascade(
        input.base_rate,
        input.clearance_level,
        input.hours,
        input.fte_percentage,
        pricing,
    );

    let margin_breakdown = margin(
        input.company_role_rate(),
        cascade_breakdown.effective_hours,
        input.capacity,
        input.final_rate,
        input.lcat_rate(),
        settings,
    );

    debug!(
        title = %input.title,
        burdened_rate = %cascade_breakdown.burdened_rate,
        company_minimum_rate = %margin_breakdown.company_minimum_rate,
        final_rate = %input.final_rate,
        "Priced labor category"
    );

    LaborCategoryResult {
        input: input.clone(),
        cascade: cascade_breakdown,
        margin: margin_breakdown,
        settings_version: settings.version,
    }
}

/// Prices a whole project and rolls it up into a [`PricingRun`].
///
/// The same settings snapshot is used for every category so a run is
/// internally consistent even if an admin update lands mid-pass.
pub fn price_categories(
    inputs: &[LaborCategoryInput],
    pricing: PricingSettings,
    settings: &SystemSettings,
) -> PricingRun {
    let results: Vec<LaborCategoryResult> = inputs
        .iter()
        .map(|input| price_labor_category(input, pricing, settings))
        .collect();

    let summary = summarize(&results);

    let run = PricingRun {
        run_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        settings_version: settings.version,
        results,
        summary,
    };

    info!(
        run_id = %run.run_id,
        categories = run.summary.total_categories,
        total_burdened_cost = %run.summary.total_burdened_cost,
        total_actual_profit = %run.summary.total_actual_profit,
        settings_version = run.settings_version,
        "Pricing run completed"
    );

    run
}
