//! Error types for the employee registry.
//!
//! Id-keyed lookups and mutations report found/not-found through
//! [`Outcome`](crate::models::Outcome) and `Option`, not through this type.
//! [`RegistryError`] covers the fallible edges: loading a roster file and
//! callers that want a missing record as an error.

use thiserror::Error;

/// The main error type for the employee registry.
///
/// # Example
///
/// ```
/// use employee_registry::error::RegistryError;
///
/// let error = RegistryError::EmployeeNotFound { id: 7 };
/// assert_eq!(error.to_string(), "Employee not found: 7");
/// ```
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Roster file was not found or could not be read.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee with the requested id is present.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: u32,
    },

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return RegistryError.
pub type RegistryResult<T> = Result<T, RegistryError>;
