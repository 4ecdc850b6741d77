//! Catalog reference records.
//!
//! This module defines the read-only reference data consumed at
//! calculation and validation time: contract vehicles with their rate
//! ceilings, company roles with their pay bands, and the per-role rate
//! validation rules. These records are created by admin workflows and
//! are never mutated by the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A government contracting mechanism imposing rate ceilings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractVehicle {
    /// The human-readable vehicle name.
    pub name: String,
    /// The short vehicle code (e.g., "GSA-MAS").
    pub code: String,
    /// Contractually permitted annual rate escalation (fractional, e.g. 0.02).
    pub escalation_rate: Decimal,
    /// Ceiling on the overhead rate (fractional).
    pub max_overhead_rate: Decimal,
    /// Ceiling on the G&A rate (fractional).
    pub max_ga_rate: Decimal,
    /// Ceiling on the fee rate (fractional).
    pub max_fee_rate: Decimal,
    /// First day the vehicle is active.
    pub start_date: NaiveDate,
    /// Last day the vehicle is active.
    pub end_date: NaiveDate,
    /// Compliance tags (e.g., "FAR 15", "TAA").
    #[serde(default)]
    pub compliance_tags: Vec<String>,
}

impl ContractVehicle {
    /// Returns true if the vehicle is active on the given date.
    pub fn is_active(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// A company role with its pay band, used as the staffing cost basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRole {
    /// Unique identifier for the role.
    pub id: Uuid,
    /// The role name (e.g., "Senior Systems Engineer").
    pub name: String,
    /// The practice area the role belongs to.
    pub practice_area: String,
    /// The annual pay-band salary in dollars.
    pub pay_band: Decimal,
    /// Expected annual pay increase (fractional).
    pub rate_increase: Decimal,
}

/// Min/max/typical rate bounds for a company role, optionally scoped to
/// a contract vehicle or project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateValidationRule {
    /// The company role the rule applies to.
    pub company_role_id: Uuid,
    /// Optional contract-vehicle scoping (by code).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_vehicle_code: Option<String>,
    /// Optional project scoping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Uuid>,
    /// Hard floor: proposing below this is an error.
    pub min_rate: Decimal,
    /// Soft ceiling: proposing above this is a warning.
    pub max_rate: Decimal,
    /// The rate this role typically bills at.
    pub typical_rate: Decimal,
    /// Lowest acceptable annual escalation (fractional).
    pub min_escalation_rate: Decimal,
    /// Highest acceptable annual escalation (fractional).
    pub max_escalation_rate: Decimal,
}
