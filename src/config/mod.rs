//! Roster loading for the employee registry.
//!
//! This module reads an initial set of employee records from a YAML file so a
//! registry can start populated. Rosters are only ever read.
//!
//! # Example
//!
//! ```no_run
//! use employee_registry::config::ConfigLoader;
//!
//! let registry = ConfigLoader::load("./config/sample_roster.yaml").unwrap().into_registry();
//! println!("Employees: {}", registry.count());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::RosterConfig;
