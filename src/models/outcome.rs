//! Found/not-found status for id-keyed mutations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of an id-keyed mutation such as edit or delete.
///
/// # Example
///
/// ```
/// use employee_registry::models::Outcome;
///
/// assert!(Outcome::Updated.is_found());
/// assert!(!Outcome::NotFound.is_found());
/// assert_eq!(Outcome::Deleted.to_string(), "Employee deleted successfully.");
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A record with the id was found and replaced.
    Updated,
    /// A record with the id was found and removed.
    Deleted,
    /// No record with the id exists; the registry is unchanged.
    NotFound,
}

impl Outcome {
    /// Returns true if a matching record was found.
    pub fn is_found(self) -> bool {
        !matches!(self, Outcome::NotFound)
    }

    /// Human-readable status message.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Updated => "Employee updated successfully.",
            Outcome::Deleted => "Employee deleted successfully.",
            Outcome::NotFound => "Employee not found.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
