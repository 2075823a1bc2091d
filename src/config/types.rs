//! Configuration types for roster seeding.
//!
//! These structures are deserialized from YAML roster files.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// A roster file: the records a registry starts with.
///
/// ```yaml
/// employees:
///   - id: 1
///     name: John Smith
///     age: 30
///     position: Manager
///     salary: "5000"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Records in file order.
    #[serde(default)]
    pub employees: Vec<Employee>,
}
