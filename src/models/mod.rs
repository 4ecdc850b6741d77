//! Data models for the labor pricing engine.
//!
//! This module contains the input, reference, and result records that
//! flow between the engine and its collaborators.

mod labor_category;
mod reference;
mod result;

pub use labor_category::{
    ClearanceLevel, CompanyRoleRef, FinalRateMetadata, FinalRateSource, LaborCategoryInput,
    LcatLink, ProjectRoleRef,
};
pub use reference::{CompanyRole, ContractVehicle, RateValidationRule};
pub use result::{
    CascadeBreakdown, LaborCategoryResult, LaborCategorySummary, MarginBreakdown, PricingRun,
};
