//! Patch structure for replacing an employee record without aliasing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Employee;

/// A partial change to an [`Employee`].
///
/// Fields left as `None` keep their current value. The id is never patched.
///
/// # Example
///
/// ```
/// use employee_registry::models::{Employee, EmployeeUpdate};
/// use rust_decimal::Decimal;
///
/// let current = Employee::new(2, "Emily Johnson", 25, "Engineer", Decimal::new(4000, 0));
/// let patch = EmployeeUpdate::default()
///     .with_age(26)
///     .with_position("Senior Engineer");
///
/// let updated = patch.apply(&current);
/// assert_eq!(updated.age, 26);
/// assert_eq!(updated.position, "Senior Engineer");
/// assert_eq!(updated.name, "Emily Johnson");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    /// Replacement name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Replacement position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Replacement salary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
}

impl EmployeeUpdate {
    /// Sets the replacement name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement age.
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets the replacement position.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Sets the replacement salary.
    pub fn with_salary(mut self, salary: Decimal) -> Self {
        self.salary = Some(salary);
        self
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.position.is_none()
            && self.salary.is_none()
    }

    /// Builds a new record from `current` with this patch applied.
    pub fn apply(&self, current: &Employee) -> Employee {
        Employee {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            age: self.age.unwrap_or(current.age),
            position: self
                .position
                .clone()
                .unwrap_or_else(|| current.position.clone()),
            salary: self.salary.unwrap_or(current.salary),
        }
    }
}
