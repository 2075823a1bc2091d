//! Employee model.
//!
//! This module defines the [`Employee`] record held by the registry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single employee record.
///
/// Ids are assigned by the caller. The registry does not enforce uniqueness,
/// so two records may share an id; id-keyed operations act on the first one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Caller-assigned identifier.
    pub id: u32,
    /// Full name of the employee.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Job title (e.g., "Engineer").
    pub position: String,
    /// Salary amount.
    pub salary: Decimal,
}

impl Employee {
    /// Creates a new employee record.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_registry::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(1, "John Smith", 30, "Manager", Decimal::new(5000, 0));
    /// assert_eq!(employee.name, "John Smith");
    /// assert_eq!(employee.salary, Decimal::new(5000, 0));
    /// ```
    pub fn new(
        id: u32,
        name: impl Into<String>,
        age: u32,
        position: impl Into<String>,
        salary: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            position: position.into(),
            salary,
        }
    }

    /// Returns true if the name contains `needle`, ignoring case.
    ///
    /// An empty needle matches every name.
    ///
    /// ```
    /// use employee_registry::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(2, "Emily Johnson", 25, "Engineer", Decimal::new(4000, 0));
    /// assert!(employee.name_contains("john"));
    /// assert!(!employee.name_contains("smith"));
    /// ```
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
