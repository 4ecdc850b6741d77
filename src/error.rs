//! Error types for the labor pricing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading reference data
//! and pricing labor categories.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the labor pricing engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Note that
/// the arithmetic layer ([`crate::calculation`]) is infallible; errors arise
/// only from reference-data lookups and malformed inputs.
///
/// # Example
///
/// ```
/// use pricing_engine::error::EngineError;
///
/// let error = EngineError::CatalogNotFound {
///     path: "/missing/vehicles.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Catalog file not found: /missing/vehicles.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A catalog reference-data file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A catalog reference-data file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A company role id did not resolve against the catalog.
    #[error("Company role not found: {id}")]
    RoleNotFound {
        /// The role id that was not found.
        id: Uuid,
    },

    /// A contract vehicle code did not resolve against the catalog.
    #[error("Contract vehicle not found: {code}")]
    VehicleNotFound {
        /// The vehicle code that was not found.
        code: String,
    },

    /// A labor category input failed range validation.
    #[error("Invalid labor category '{title}': {message}")]
    InvalidLaborCategory {
        /// The title of the invalid labor category.
        title: String,
        /// A description of what made the category invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
