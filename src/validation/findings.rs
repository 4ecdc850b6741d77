//! Validation findings and override permissions.
//!
//! Rate-ceiling violations are modeled as data, not exceptions: every
//! check produces zero or more [`ValidationFinding`] values whose
//! severity and overridability are computed from the caller's
//! permissions and override ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks the proposed rates until resolved or overridden.
    Error,
    /// Flagged for attention but does not block.
    Warning,
    /// Informational only.
    Info,
}

/// One finding from a validation pass.
///
/// Findings are produced fresh on every pass and never mutated in
/// place; overriding a field only changes how the same violation is
/// classified next time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFinding {
    /// The field the finding applies to (e.g., "overhead_rate").
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
    /// The offending value.
    pub value: Decimal,
    /// Computed severity.
    pub severity: Severity,
    /// Whether the caller's permissions allow overriding this finding.
    pub can_override: bool,
    /// Justification recorded when the finding is overridable or was
    /// previously overridden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_reason: Option<String>,
}

/// The outcome of a validation pass, findings partitioned by severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no error-severity findings remain.
    pub is_valid: bool,
    /// Blocking findings.
    pub errors: Vec<ValidationFinding>,
    /// Non-blocking findings (warnings and info).
    pub warnings: Vec<ValidationFinding>,
}

impl ValidationReport {
    /// Partitions findings into a report.
    pub fn from_findings(findings: Vec<ValidationFinding>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) = findings
            .into_iter()
            .partition(|f| f.severity == Severity::Error);
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// The roles a user can hold when validating rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Read-only access; no overrides.
    Viewer,
    /// Builds pricing and may override generic rate ceilings.
    Analyst,
    /// Additionally may override validation-rule findings.
    Manager,
    /// Additionally may override contract-vehicle ceilings.
    Admin,
}

/// The override capabilities a user holds during validation.
///
/// The role-to-capability mapping is fixed; only admins may override
/// contract-vehicle ceilings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverridePermissions {
    /// The role the capabilities derive from.
    pub user_role: UserRole,
    /// May override generic rate ceilings and escalation bounds.
    pub can_override_rates: bool,
    /// May override contract-vehicle ceilings (admin only).
    pub can_override_contract_limits: bool,
    /// May override validation-rule findings.
    pub can_override_validation: bool,
    /// Free-text justification carried onto overridable findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl OverridePermissions {
    /// Derives the capability set for a role.
    pub fn for_role(user_role: UserRole) -> Self {
        let (rates, limits, validation) = match user_role {
            UserRole::Viewer => (false, false, false),
            UserRole::Analyst => (true, false, false),
            UserRole::Manager => (true, false, true),
            UserRole::Admin => (true, true, true),
        };
        Self {
            user_role,
            can_override_rates: rates,
            can_override_contract_limits: limits,
            can_override_validation: validation,
            reason: None,
        }
    }

    /// Attaches a justification to carry onto overridable findings.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
