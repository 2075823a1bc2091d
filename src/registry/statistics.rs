//! Aggregate salary statistics over the registry.

use rust_decimal::Decimal;
use tracing::debug;

use super::Registry;
use crate::models::{SalarySummary, checked_total, mean};

impl Registry {
    /// Sum of all salaries; zero for an empty registry, `None` if the sum
    /// exceeds the `Decimal` range.
    pub fn total_salary(&self) -> Option<Decimal> {
        checked_total(&self.salaries())
    }

    /// Mean salary, or `None` when the registry is empty.
    ///
    /// Never overflows: when the total is out of range the mean is built from
    /// per-salary quotients, see [`SalarySummary`].
    ///
    /// ```
    /// use employee_registry::models::Employee;
    /// use employee_registry::registry::Registry;
    /// use rust_decimal::Decimal;
    ///
    /// let mut registry = Registry::new();
    /// assert_eq!(registry.average_salary(), None);
    ///
    /// registry.add(Employee::new(2, "Emily Johnson", 25, "Engineer", Decimal::new(4000, 0)));
    /// registry.add(Employee::new(3, "Robert Davis", 35, "Accountant", Decimal::new(4500, 0)));
    /// assert_eq!(registry.average_salary(), Some(Decimal::new(4250, 0)));
    /// ```
    pub fn average_salary(&self) -> Option<Decimal> {
        if self.employees.is_empty() {
            debug!("Average salary requested on empty registry");
            return None;
        }
        mean(&self.salaries())
    }

    /// Count, total, average, minimum and maximum salary, or `None` when empty.
    pub fn salary_summary(&self) -> Option<SalarySummary> {
        SalarySummary::from_salaries(self.salaries())
    }

    fn salaries(&self) -> Vec<Decimal> {
        self.employees.iter().map(|employee| employee.salary).collect()
    }
}
