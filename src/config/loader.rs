//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the
//! reference catalog from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{Catalog, RolesFile, ValidationRulesFile, VehiclesFile};

/// Loads the reference catalog from a directory of YAML files.
///
/// # Directory Structure
///
/// ```text
/// catalog/
/// ├── vehicles.yaml          # Contract vehicles with rate ceilings
/// ├── roles.yaml             # Company roles with pay bands
/// └── validation_rules.yaml  # Per-role rate bounds
/// ```
///
/// # Example
///
/// ```no_run
/// use pricing_engine::config::CatalogLoader;
///
/// let catalog = CatalogLoader::load("./catalog")?;
/// let vehicle = catalog.get_vehicle("GSA-MAS")?;
/// println!("Max overhead: {}", vehicle.max_overhead_rate);
/// # Ok::<(), pricing_engine::error::EngineError>(())
/// ```
pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CatalogNotFound`] when a required file is
    /// missing and [`EngineError::CatalogParseError`] when a file
    /// contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Catalog> {
        let path = path.as_ref();

        let vehicles = Self::load_yaml::<VehiclesFile>(&path.join("vehicles.yaml"))?;
        let roles = Self::load_yaml::<RolesFile>(&path.join("roles.yaml"))?;
        let rules = Self::load_yaml::<ValidationRulesFile>(&path.join("validation_rules.yaml"))?;

        Ok(Catalog::new(vehicles.vehicles, roles.roles, rules.rules))
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
