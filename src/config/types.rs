//! Catalog file structures and the in-memory catalog.
//!
//! The reference-data provider ships the engine three YAML files:
//! contract vehicles, company roles, and rate validation rules. This
//! module defines their deserialized shapes and the [`Catalog`] that
//! aggregates them with lookup accessors.

use std::collections::HashMap;

use serde::Deserialize;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{CompanyRole, ContractVehicle, RateValidationRule};

/// vehicles.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct VehiclesFile {
    /// Contract vehicles available for pricing.
    pub vehicles: Vec<ContractVehicle>,
}

/// roles.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RolesFile {
    /// Company roles with their pay bands.
    pub roles: Vec<CompanyRole>,
}

/// validation_rules.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationRulesFile {
    /// Per-role rate bounds.
    pub rules: Vec<RateValidationRule>,
}

/// The complete reference catalog, read-only at calculation time.
#[derive(Debug, Clone)]
pub struct Catalog {
    vehicles: HashMap<String, ContractVehicle>,
    roles: HashMap<Uuid, CompanyRole>,
    rules: Vec<RateValidationRule>,
}

impl Catalog {
    /// Builds a catalog from its component records.
    pub fn new(
        vehicles: Vec<ContractVehicle>,
        roles: Vec<CompanyRole>,
        rules: Vec<RateValidationRule>,
    ) -> Self {
        Self {
            vehicles: vehicles.into_iter().map(|v| (v.code.clone(), v)).collect(),
            roles: roles.into_iter().map(|r| (r.id, r)).collect(),
            rules,
        }
    }

    /// Looks up a contract vehicle by code.
    pub fn get_vehicle(&self, code: &str) -> EngineResult<&ContractVehicle> {
        self.vehicles
            .get(code)
            .ok_or_else(|| EngineError::VehicleNotFound {
                code: code.to_string(),
            })
    }

    /// Looks up a company role by id.
    pub fn get_role(&self, id: Uuid) -> EngineResult<&CompanyRole> {
        self.roles.get(&id).ok_or(EngineError::RoleNotFound { id })
    }

    /// Finds the most specific validation rule for a role.
    ///
    /// A rule scoped to the given vehicle wins over an unscoped rule;
    /// rules scoped to a different vehicle never match.
    pub fn rule_for_role(
        &self,
        role_id: Uuid,
        vehicle_code: Option<&str>,
    ) -> Option<&RateValidationRule> {
        let candidates: Vec<&RateValidationRule> = self
            .rules
            .iter()
            .filter(|rule| rule.company_role_id == role_id)
            .filter(|rule| match (&rule.contract_vehicle_code, vehicle_code) {
                (Some(scoped), Some(requested)) => scoped == requested,
                (Some(_), None) => false,
                (None, _) => true,
            })
            .collect();

        candidates
            .iter()
            .find(|rule| rule.contract_vehicle_code.is_some())
            .or_else(|| candidates.first())
            .copied()
    }

    /// Returns all vehicles in the catalog.
    pub fn vehicles(&self) -> impl Iterator<Item = &ContractVehicle> {
        self.vehicles.values()
    }

    /// Returns all roles in the catalog.
    pub fn roles(&self) -> impl Iterator<Item = &CompanyRole> {
        self.roles.values()
    }
}
