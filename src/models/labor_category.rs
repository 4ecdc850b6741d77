//! Labor category model and related types.
//!
//! This module defines the [`LaborCategoryInput`] struct, the
//! [`ClearanceLevel`] enum with its fixed premium table, and the
//! negotiated final-rate metadata for representing one priced labor
//! category in a project.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Security clearance required for a labor category.
///
/// Each level carries a fixed premium applied to the base rate before
/// any indirect burdens. The premium table is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearanceLevel {
    /// No clearance required.
    None,
    /// Public Trust positions (5% premium).
    PublicTrust,
    /// Secret clearance (10% premium).
    Secret,
    /// Top Secret clearance (20% premium).
    TopSecret,
}

impl ClearanceLevel {
    /// Returns the fixed rate premium for this clearance level.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricing_engine::models::ClearanceLevel;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(ClearanceLevel::None.premium(), Decimal::ZERO);
    /// assert_eq!(ClearanceLevel::Secret.premium(), Decimal::new(10, 2));
    /// ```
    pub fn premium(self) -> Decimal {
        match self {
            ClearanceLevel::None => Decimal::ZERO,
            ClearanceLevel::PublicTrust => Decimal::new(5, 2),
            ClearanceLevel::Secret => Decimal::new(10, 2),
            ClearanceLevel::TopSecret => Decimal::new(20, 2),
        }
    }
}

/// Where a negotiated final rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalRateSource {
    /// Adopted from the contract-vehicle LCAT catalog rate.
    Catalog,
    /// Derived from the company minimum-rate floor.
    Company,
    /// Entered by hand during negotiation.
    Manual,
}

/// Provenance for a negotiated final rate.
///
/// The final rate drives billed cost and profit metrics, so every change
/// records who set it, when, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalRateMetadata {
    /// How the final rate was chosen.
    pub source: FinalRateSource,
    /// Free-text justification for the chosen rate.
    pub reason: String,
    /// When the rate was set.
    pub timestamp: DateTime<Utc>,
    /// Who set the rate.
    pub actor: String,
}

impl FinalRateMetadata {
    /// Stamps metadata for a manually negotiated rate.
    pub fn manual(reason: impl Into<String>, actor: impl Into<String>) -> Self {
        Self {
            source: FinalRateSource::Manual,
            reason: reason.into(),
            timestamp: Utc::now(),
            actor: actor.into(),
        }
    }

    /// Stamps metadata for a rate adopted from the LCAT catalog.
    pub fn from_catalog(actor: impl Into<String>) -> Self {
        Self {
            source: FinalRateSource::Catalog,
            reason: "Adopted catalog LCAT rate".to_string(),
            timestamp: Utc::now(),
            actor: actor.into(),
        }
    }

    /// Stamps metadata for a rate taken from the company minimum floor.
    pub fn from_company_floor(actor: impl Into<String>) -> Self {
        Self {
            source: FinalRateSource::Company,
            reason: "Adopted company minimum rate".to_string(),
            timestamp: Utc::now(),
            actor: actor.into(),
        }
    }
}

/// Linkage to a catalog LCAT on a contract vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LcatLink {
    /// The contract vehicle code (e.g., "GSA-MAS").
    pub vehicle_code: String,
    /// The LCAT code within the vehicle's catalog.
    pub lcat_code: String,
    /// The catalog ceiling rate for this LCAT.
    pub lcat_rate: Decimal,
}

/// Expected staffing profile from a project role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRoleRef {
    /// Hours the role typically runs in a period of performance.
    pub typical_hours: Decimal,
    /// Clearance the role typically carries.
    pub typical_clearance: ClearanceLevel,
}

/// Reference to the company role staffing this category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRoleRef {
    /// The catalog id of the company role.
    pub id: Uuid,
    /// The role name (e.g., "Senior Systems Engineer").
    pub name: String,
    /// The role's annual pay-band salary in dollars.
    pub rate: Decimal,
}

/// One labor category as entered for pricing.
///
/// Carries the base pay data the cascade consumes plus the negotiated
/// `final_rate`, which is never derived from the computed burdened rate
/// and only ever compared against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborCategoryInput {
    /// The labor category title (e.g., "Software Engineer III").
    pub title: String,
    /// The raw hourly base rate before any premiums or burdens.
    pub base_rate: Decimal,
    /// Contracted hours for the period of performance (1-10000).
    pub hours: Decimal,
    /// Full-time-equivalent percentage (0.01-100).
    pub fte_percentage: Decimal,
    /// Number of identical seats this category represents.
    pub capacity: Decimal,
    /// Required security clearance.
    pub clearance_level: ClearanceLevel,
    /// Place of performance.
    pub location: String,
    /// Optional linkage to a catalog LCAT.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lcat: Option<LcatLink>,
    /// Optional expected staffing profile from a project role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_role: Option<ProjectRoleRef>,
    /// Optional reference to the company role staffing this category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_role: Option<CompanyRoleRef>,
    /// The negotiated hourly rate actually billed.
    pub final_rate: Decimal,
    /// Provenance for the negotiated final rate.
    pub final_rate_metadata: FinalRateMetadata,
}

impl LaborCategoryInput {
    /// Checks the input ranges the pricing workflow accepts.
    ///
    /// The arithmetic layer itself accepts any values and lets them
    /// propagate; this gate is for data entering from collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLaborCategory`] when:
    /// - `base_rate` is not positive
    /// - `hours` is outside 1-10000
    /// - `fte_percentage` is outside 0.01-100
    /// - `capacity` is negative
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_rate <= Decimal::ZERO {
            return Err(self.invalid("base_rate must be greater than zero"));
        }
        if self.hours < Decimal::ONE || self.hours > Decimal::new(10_000, 0) {
            return Err(self.invalid("hours must be between 1 and 10000"));
        }
        let min_fte = Decimal::new(1, 2);
        if self.fte_percentage < min_fte || self.fte_percentage > Decimal::new(100, 0) {
            return Err(self.invalid("fte_percentage must be between 0.01 and 100"));
        }
        if self.capacity < Decimal::ZERO {
            return Err(self.invalid("capacity must not be negative"));
        }
        Ok(())
    }

    /// Returns the catalog LCAT rate, or zero when the category is unlinked.
    pub fn lcat_rate(&self) -> Decimal {
        self.lcat.as_ref().map_or(Decimal::ZERO, |l| l.lcat_rate)
    }

    /// Returns the company role's annual pay-band salary, or zero when unstaffed.
    pub fn company_role_rate(&self) -> Decimal {
        self.company_role.as_ref().map_or(Decimal::ZERO, |r| r.rate)
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidLaborCategory {
            title: self.title.clone(),
            message: message.to_string(),
        }
    }
}
