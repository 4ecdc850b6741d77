//! Rate validation for the labor pricing engine.
//!
//! Checks proposed rates against contract-vehicle ceilings and
//! role-specific bounds, producing findings as data filtered by the
//! caller's override permissions and per-session override ledger.

mod findings;
mod rules;
mod state;

pub use findings::{
    OverridePermissions, Severity, UserRole, ValidationFinding, ValidationReport,
};
pub use rules::{
    check_escalation_bounds, validate_against_ceilings, validate_labor_category, validate_rate,
    GENERIC_MAX_FEE_RATE, GENERIC_MAX_GA_RATE, GENERIC_MAX_OVERHEAD_RATE,
};
pub use state::{FieldValidationState, OverrideLedger};
