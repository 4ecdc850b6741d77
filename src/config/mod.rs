//! Reference catalog loading for the labor pricing engine.
//!
//! This module provides functionality for loading contract vehicles,
//! company roles, and rate validation rules from YAML files.

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{Catalog, RolesFile, ValidationRulesFile, VehiclesFile};
