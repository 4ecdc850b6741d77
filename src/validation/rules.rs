//! Rate-ceiling and bounds checks.
//!
//! All checks communicate findings through their return values; nothing
//! in this module panics or raises. Severity depends on three things:
//! the violation itself, the caller's override permissions, and whether
//! the field was previously overridden in the session ledger.

use rust_decimal::Decimal;

use crate::config::Catalog;
use crate::models::{ContractVehicle, LaborCategoryInput, RateValidationRule};

use super::findings::{OverridePermissions, Severity, ValidationFinding, ValidationReport};
use super::state::OverrideLedger;

/// Generic overhead ceiling applied when no vehicle is specified (100%).
pub const GENERIC_MAX_OVERHEAD_RATE: Decimal = Decimal::ONE;

/// Generic G&A ceiling applied when no vehicle is specified (50%).
pub const GENERIC_MAX_GA_RATE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Generic fee ceiling applied when no vehicle is specified (20%).
pub const GENERIC_MAX_FEE_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Share below the typical rate that triggers a warning (10%).
const TYPICAL_RATE_TOLERANCE: Decimal = Decimal::from_parts(90, 0, 0, false, 2);

/// Classifies a ceiling violation against the permission gate and the
/// session ledger.
///
/// A previously overridden field reports as a warning even when the
/// gate would make it an error; otherwise the gate decides whether the
/// violation is a blocking error or an overridable warning.
fn classify_violation(
    field: &str,
    message: String,
    value: Decimal,
    gate_open: bool,
    permissions: &OverridePermissions,
    overrides: &OverrideLedger,
) -> ValidationFinding {
    let overridden = overrides.is_overridden(field);
    let (severity, can_override, override_reason) = if overridden {
        (
            Severity::Warning,
            true,
            Some(
                permissions
                    .reason
                    .clone()
                    .unwrap_or_else(|| "Previously overridden".to_string()),
            ),
        )
    } else if gate_open {
        (Severity::Warning, true, permissions.reason.clone())
    } else {
        (Severity::Error, false, None)
    };

    ValidationFinding {
        field: field.to_string(),
        message,
        value,
        severity,
        can_override,
        override_reason,
    }
}

/// A negative burden rate is always a blocking error, regardless of
/// permissions or prior overrides.
fn negative_rate_finding(field: &str, value: Decimal) -> ValidationFinding {
    ValidationFinding {
        field: field.to_string(),
        message: format!("{field} must not be negative"),
        value,
        severity: Severity::Error,
        can_override: false,
        override_reason: None,
    }
}

/// Checks proposed burden rates against contract-vehicle or generic
/// ceilings.
///
/// With a vehicle, its `max_overhead_rate`/`max_ga_rate`/`max_fee_rate`
/// apply and violations are gated by `can_override_contract_limits`.
/// Without one, the generic ceilings (overhead 100%, G&A 50%, fee 20%)
/// apply, gated by `can_override_rates`.
pub fn validate_against_ceilings(
    overhead_rate: Decimal,
    ga_rate: Decimal,
    fee_rate: Decimal,
    vehicle: Option<&ContractVehicle>,
    permissions: &OverridePermissions,
    overrides: &OverrideLedger,
) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    let checks: [(&str, Decimal); 3] = [
        ("overhead_rate", overhead_rate),
        ("ga_rate", ga_rate),
        ("fee_rate", fee_rate),
    ];

    for (field, value) in checks {
        if value < Decimal::ZERO {
            findings.push(negative_rate_finding(field, value));
        }
    }

    let (ceilings, gate_open, source): ([Decimal; 3], bool, String) = match vehicle {
        Some(v) => (
            [v.max_overhead_rate, v.max_ga_rate, v.max_fee_rate],
            permissions.can_override_contract_limits,
            format!("vehicle {}", v.code),
        ),
        None => (
            [
                GENERIC_MAX_OVERHEAD_RATE,
                GENERIC_MAX_GA_RATE,
                GENERIC_MAX_FEE_RATE,
            ],
            permissions.can_override_rates,
            "generic".to_string(),
        ),
    };

    for ((field, value), ceiling) in checks.into_iter().zip(ceilings) {
        if value >= Decimal::ZERO && value > ceiling {
            findings.push(classify_violation(
                field,
                format!("{field} {value} exceeds {source} ceiling {ceiling}"),
                value,
                gate_open,
                permissions,
                overrides,
            ));
        }
    }

    findings
}

/// Checks a proposed rate against a company-role validation rule.
///
/// Below the minimum is a blocking error (overridable only through the
/// session ledger, with `can_override_validation` deciding whether the
/// override action is offered); above the maximum or more than 10%
/// below the typical rate is a warning.
pub fn validate_rate(
    rate: Decimal,
    rule: Option<&RateValidationRule>,
    permissions: &OverridePermissions,
    overrides: &OverrideLedger,
) -> ValidationReport {
    let mut findings = Vec::new();

    if let Some(rule) = rule {
        if rate < rule.min_rate {
            let overridden = overrides.is_overridden("final_rate");
            findings.push(ValidationFinding {
                field: "final_rate".to_string(),
                message: format!(
                    "rate {rate} is below the role minimum {}",
                    rule.min_rate
                ),
                value: rate,
                severity: if overridden {
                    Severity::Warning
                } else {
                    Severity::Error
                },
                can_override: permissions.can_override_validation,
                override_reason: overridden.then(|| {
                    permissions
                        .reason
                        .clone()
                        .unwrap_or_else(|| "Previously overridden".to_string())
                }),
            });
        } else if rate > rule.max_rate {
            findings.push(ValidationFinding {
                field: "final_rate".to_string(),
                message: format!(
                    "rate {rate} is above the role maximum {}",
                    rule.max_rate
                ),
                value: rate,
                severity: Severity::Warning,
                can_override: permissions.can_override_validation,
                override_reason: None,
            });
        } else if rule.typical_rate > Decimal::ZERO
            && rate < rule.typical_rate * TYPICAL_RATE_TOLERANCE
        {
            findings.push(ValidationFinding {
                field: "final_rate".to_string(),
                message: format!(
                    "rate {rate} is more than 10% below the typical rate {}",
                    rule.typical_rate
                ),
                value: rate,
                severity: Severity::Warning,
                can_override: permissions.can_override_validation,
                override_reason: None,
            });
        }
    }

    ValidationReport::from_findings(findings)
}

/// Checks an escalation rate against a rule's bounds.
///
/// Out-of-bounds escalation is an error unless the caller may override
/// generic rate policy, in which case it reports as an overridable
/// warning; company escalation bounds are policy, not vehicle ceilings.
pub fn check_escalation_bounds(
    escalation_rate: Decimal,
    rule: &RateValidationRule,
    permissions: &OverridePermissions,
    overrides: &OverrideLedger,
) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    if escalation_rate < rule.min_escalation_rate || escalation_rate > rule.max_escalation_rate {
        findings.push(classify_violation(
            "escalation_rate",
            format!(
                "escalation rate {escalation_rate} is outside the allowed range {} to {}",
                rule.min_escalation_rate, rule.max_escalation_rate
            ),
            escalation_rate,
            permissions.can_override_rates,
            permissions,
            overrides,
        ));
    }

    findings
}

/// Validates one labor category against the reference catalog.
///
/// Resolves the category's contract vehicle and company-role rule,
/// reporting dangling references as findings rather than errors, then
/// runs the rate and escalation checks. A clearance that differs from
/// the project role's typical clearance is surfaced as informational.
pub fn validate_labor_category(
    input: &LaborCategoryInput,
    catalog: &Catalog,
    permissions: &OverridePermissions,
    overrides: &OverrideLedger,
) -> ValidationReport {
    let mut findings = Vec::new();
    let mut vehicle = None;

    if let Some(lcat) = &input.lcat {
        match catalog.get_vehicle(&lcat.vehicle_code) {
            Ok(v) => vehicle = Some(v),
            Err(_) => findings.push(ValidationFinding {
                field: "contract_vehicle".to_string(),
                message: format!("contract vehicle '{}' not found", lcat.vehicle_code),
                value: Decimal::ZERO,
                severity: Severity::Error,
                can_override: false,
                override_reason: None,
            }),
        }
    }

    let mut rule = None;
    if let Some(role) = &input.company_role {
        if catalog.get_role(role.id).is_err() {
            findings.push(ValidationFinding {
                field: "company_role".to_string(),
                message: format!("company role '{}' not found", role.name),
                value: Decimal::ZERO,
                severity: Severity::Error,
                can_override: false,
                override_reason: None,
            });
        } else {
            rule = catalog.rule_for_role(role.id, vehicle.map(|v| v.code.as_str()));
        }
    }

    let rate_report = validate_rate(input.final_rate, rule, permissions, overrides);
    findings.extend(rate_report.errors);
    findings.extend(rate_report.warnings);

    if let (Some(vehicle), Some(rule)) = (vehicle, rule) {
        findings.extend(check_escalation_bounds(
            vehicle.escalation_rate,
            rule,
            permissions,
            overrides,
        ));
    }

    if let Some(project_role) = &input.project_role {
        if project_role.typical_clearance != input.clearance_level {
            findings.push(ValidationFinding {
                field: "clearance_level".to_string(),
                message: format!(
                    "clearance {:?} differs from the role's typical {:?}",
                    input.clearance_level, project_role.typical_clearance
                ),
                value: input.clearance_level.premium(),
                severity: Severity::Info,
                can_override: false,
                override_reason: None,
            });
        }
    }

    ValidationReport::from_findings(findings)
}
