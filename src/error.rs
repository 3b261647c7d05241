//! Error types for the cadence CLI.
//!
//! The planning core never fails; these errors come from the plumbing around
//! it (configuration, catalog and library file I/O, argument handling).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for cadence operations.
#[derive(Error, Debug)]
pub enum CadenceError {
    /// User provided invalid arguments or the library is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// `cadence.yaml` could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The observance catalog exists but is not valid JSON/YAML.
    #[error("Observance catalog error: {0}")]
    CatalogError(String),

    /// A library file or directory could not be read or written.
    #[error("Library I/O failed: {0}")]
    LibraryError(String),
}

impl CadenceError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CadenceError::UserError(_) => exit_codes::USER_ERROR,
            CadenceError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            CadenceError::CatalogError(_) => exit_codes::CATALOG_ERROR,
            CadenceError::LibraryError(_) => exit_codes::LIBRARY_FAILURE,
        }
    }
}

/// Result type alias for cadence operations.
pub type Result<T> = std::result::Result<T, CadenceError>;
