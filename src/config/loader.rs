//! Roster loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading a roster of
//! employee records from YAML.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::models::Employee;
use crate::registry::Registry;

use super::types::RosterConfig;

/// Loads a roster of employee records.
///
/// The file is read once; nothing is ever written back to it.
///
/// # Example
///
/// ```no_run
/// use employee_registry::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample_roster.yaml")?;
/// let registry = loader.into_registry();
/// println!("Loaded {} employees", registry.count());
/// # Ok::<(), employee_registry::error::RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads a roster from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not a valid roster (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> RegistryResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RegistryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        debug!(
            path = %path_str,
            count = loader.config.employees.len(),
            "Loaded roster"
        );
        Ok(loader)
    }

    /// Parses a roster from YAML text.
    ///
    /// ```
    /// use employee_registry::config::ConfigLoader;
    ///
    /// let yaml = r#"
    /// employees:
    ///   - { id: 1, name: John Smith, age: 30, position: Manager, salary: "5000" }
    /// "#;
    /// let loader = ConfigLoader::from_yaml_str(yaml)?;
    /// assert_eq!(loader.employees().len(), 1);
    /// # Ok::<(), employee_registry::error::RegistryError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> RegistryResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> RegistryResult<Self> {
        let config: RosterConfig =
            serde_yaml::from_str(content).map_err(|e| RegistryError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { config })
    }

    /// Returns the underlying roster configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the roster records in file order.
    pub fn employees(&self) -> &[Employee] {
        &self.config.employees
    }

    /// Builds a registry holding the roster records in file order.
    pub fn into_registry(self) -> Registry {
        Registry::from_employees(self.config.employees)
    }
}
