//! Per-field override/dismiss state.
//!
//! Override state is per-session and caller-owned: the ledger is passed
//! into each validation pass and never embedded in the data records.
//! Overriding a field does not mutate any stored rate; it only changes
//! how the same violation is classified on the next pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Validation lifecycle state for a single field.
///
/// A field moves `Unvalidated -> {Valid | Error | Warning}` on a pass,
/// to `Overridden` when the user overrides its finding, and back to its
/// recomputed state when the override is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValidationState {
    /// No pass has classified the field yet.
    Unvalidated,
    /// The last pass found no violation.
    Valid,
    /// The last pass produced a blocking finding.
    Error,
    /// The last pass produced a non-blocking finding.
    Warning,
    /// The user overrode the field's finding; violations report as
    /// warnings until dismissed.
    Overridden,
}

/// Caller-owned ledger of per-field override state, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideLedger {
    fields: HashMap<String, FieldValidationState>,
}

impl OverrideLedger {
    /// Creates an empty ledger; every field starts unvalidated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state for a field.
    pub fn state(&self, field: &str) -> FieldValidationState {
        self.fields
            .get(field)
            .copied()
            .unwrap_or(FieldValidationState::Unvalidated)
    }

    /// Returns true if the field's finding is currently overridden.
    pub fn is_overridden(&self, field: &str) -> bool {
        self.state(field) == FieldValidationState::Overridden
    }

    /// Marks a field's finding as overridden.
    pub fn override_field(&mut self, field: impl Into<String>) {
        self.fields
            .insert(field.into(), FieldValidationState::Overridden);
    }

    /// Dismisses an override so the next pass reclassifies the field.
    ///
    /// Dismissing a field that is not overridden is a no-op.
    pub fn dismiss(&mut self, field: &str) {
        if self.is_overridden(field) {
            self.fields
                .insert(field.to_string(), FieldValidationState::Unvalidated);
        }
    }

    /// Records the classification a pass produced for a field.
    ///
    /// Overridden fields keep their override until dismissed.
    pub fn record(&mut self, field: impl Into<String>, state: FieldValidationState) {
        let field = field.into();
        if !self.is_overridden(&field) {
            self.fields.insert(field, state);
        }
    }
}
