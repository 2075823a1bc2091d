//! Core data models for the employee registry.
//!
//! This module contains the employee record and the small value types the
//! registry operations accept and return.

mod employee;
mod employee_update;
mod keyword;
mod outcome;
mod salary_summary;

pub use employee::Employee;
pub use employee_update::EmployeeUpdate;
pub use keyword::Keyword;
pub use outcome::Outcome;
pub use salary_summary::SalarySummary;
pub(crate) use salary_summary::{checked_total, mean};
