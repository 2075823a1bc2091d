//! The registry collection and its id-keyed and lookup operations.

use tracing::{debug, info, warn};

use crate::error::{RegistryError, RegistryResult};
use crate::models::{Employee, EmployeeUpdate, Keyword, Outcome};

/// An ordered, in-memory collection of employee records.
///
/// Records keep insertion order until one of the sort operations reorders
/// them. Lookups hand out shared borrows only; to change a record, clone it,
/// modify the copy and pass it to [`Registry::edit`], or describe the change
/// with an [`EmployeeUpdate`] and call [`Registry::update`].
///
/// # Example
///
/// ```
/// use employee_registry::models::{Employee, Outcome};
/// use employee_registry::registry::Registry;
/// use rust_decimal::Decimal;
///
/// let mut registry = Registry::new();
/// registry.add(Employee::new(1, "John Smith", 30, "Manager", Decimal::new(5000, 0)));
/// registry.add(Employee::new(2, "Emily Johnson", 25, "Engineer", Decimal::new(4000, 0)));
///
/// let mut emily = registry.get_by_id(2).cloned().unwrap();
/// emily.age = 26;
/// assert_eq!(registry.edit(2, emily), Outcome::Updated);
/// assert_eq!(registry.get_by_id(2).unwrap().age, 26);
///
/// assert_eq!(registry.delete(1), Outcome::Deleted);
/// assert_eq!(registry.count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    pub(super) employees: Vec<Employee>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `employees` in the given order.
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Appends an employee to the end of the registry.
    ///
    /// Duplicate ids are accepted.
    pub fn add(&mut self, employee: Employee) {
        debug!(id = employee.id, name = %employee.name, "Adding employee");
        self.employees.push(employee);
    }

    /// Replaces the first record with `id` by `replacement`.
    ///
    /// The replacement is stored as given, including its own id.
    pub fn edit(&mut self, id: u32, replacement: Employee) -> Outcome {
        match self.find_index_by_id(id) {
            Some(index) => self.replace_at(index, id, replacement),
            None => not_found(id),
        }
    }

    /// Applies `patch` to a copy of the first record with `id` and stores the copy.
    pub fn update(&mut self, id: u32, patch: &EmployeeUpdate) -> Outcome {
        match self.find_index_by_id(id) {
            Some(index) => {
                let updated = patch.apply(&self.employees[index]);
                self.replace_at(index, id, updated)
            }
            None => not_found(id),
        }
    }

    /// Removes the first record with `id`; later records shift left.
    pub fn delete(&mut self, id: u32) -> Outcome {
        match self.find_index_by_id(id) {
            Some(index) => {
                self.employees.remove(index);
                let outcome = Outcome::Deleted;
                info!(id, remaining = self.employees.len(), "{}", outcome);
                outcome
            }
            None => not_found(id),
        }
    }

    /// Returns the first record with `id`.
    pub fn get_by_id(&self, id: u32) -> Option<&Employee> {
        self.find_index_by_id(id).map(|index| &self.employees[index])
    }

    /// Returns the first record with `id`, or [`RegistryError::EmployeeNotFound`].
    pub fn require(&self, id: u32) -> RegistryResult<&Employee> {
        self.get_by_id(id).ok_or(RegistryError::EmployeeNotFound { id })
    }

    /// Returns every record whose name contains `name`, ignoring case.
    pub fn get_by_name(&self, name: &str) -> Vec<&Employee> {
        let matches: Vec<&Employee> = self
            .employees
            .iter()
            .filter(|employee| employee.name_contains(name))
            .collect();
        debug!(query = %name, matches = matches.len(), "Name lookup");
        matches
    }

    /// Returns every record matching `keyword`, in registry order.
    ///
    /// See [`Keyword`] for the matching rules.
    ///
    /// ```
    /// use employee_registry::models::Employee;
    /// use employee_registry::registry::Registry;
    /// use rust_decimal::Decimal;
    ///
    /// let registry: Registry = vec![
    ///     Employee::new(2, "Emily Johnson", 25, "Engineer", Decimal::new(4000, 0)),
    ///     Employee::new(3, "Robert Davis", 35, "Accountant", Decimal::new(4500, 0)),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// assert_eq!(registry.search(3u32).len(), 1);
    /// assert!(registry.search("3").is_empty());
    /// assert_eq!(registry.search("e").len(), 2);
    /// ```
    pub fn search(&self, keyword: impl Into<Keyword>) -> Vec<&Employee> {
        let keyword = keyword.into();
        let matches: Vec<&Employee> = self
            .employees
            .iter()
            .filter(|employee| match &keyword {
                Keyword::Id(id) => employee.id == *id,
                Keyword::Text(text) => employee.name_contains(text),
            })
            .collect();
        debug!(?keyword, matches = matches.len(), "Search");
        matches
    }

    /// Number of records.
    pub fn count(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// All records in their current order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Iterates over the records in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    fn find_index_by_id(&self, id: u32) -> Option<usize> {
        self.employees.iter().position(|employee| employee.id == id)
    }

    fn replace_at(&mut self, index: usize, id: u32, replacement: Employee) -> Outcome {
        self.employees[index] = replacement;
        let outcome = Outcome::Updated;
        info!(id, "{}", outcome);
        outcome
    }
}

fn not_found(id: u32) -> Outcome {
    let outcome = Outcome::NotFound;
    warn!(id, "{}", outcome);
    outcome
}

impl FromIterator<Employee> for Registry {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self::from_employees(iter.into_iter().collect())
    }
}

impl Extend<Employee> for Registry {
    fn extend<I: IntoIterator<Item = Employee>>(&mut self, iter: I) {
        for employee in iter {
            self.add(employee);
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
