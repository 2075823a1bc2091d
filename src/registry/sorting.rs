//! In-place sort operations.
//!
//! All sorts are stable, so applying the same sort twice leaves the order
//! unchanged and records with equal keys keep their relative order.

use std::cmp::Ordering;

use tracing::debug;

use super::Registry;

/// Compares two names for display ordering.
///
/// Names are compared case-insensitively first and fall back to their exact
/// text, giving a total order without locale tables.
///
/// ```
/// use employee_registry::registry::compare_names;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_names("alice", "Bob"), Ordering::Less);
/// assert_eq!(compare_names("Bob", "bob"), Ordering::Less);
/// assert_eq!(compare_names("Eve", "Eve"), Ordering::Equal);
/// ```
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl Registry {
    /// Sorts the records by name, ascending.
    pub fn sort_by_name(&mut self) {
        self.employees.sort_by(|a, b| compare_names(&a.name, &b.name));
        debug!(count = self.employees.len(), "Sorted employees by name");
    }

    /// Sorts the records by age, ascending.
    pub fn sort_by_age(&mut self) {
        self.employees.sort_by_key(|employee| employee.age);
        debug!(count = self.employees.len(), "Sorted employees by age");
    }

    /// Sorts the records by salary, ascending.
    pub fn sort_by_salary(&mut self) {
        self.employees.sort_by_key(|employee| employee.salary);
        debug!(count = self.employees.len(), "Sorted employees by salary");
    }
}
