//! The employee registry and its operations.
//!
//! This module contains the [`Registry`] collection with its add, edit,
//! update, delete and lookup operations, the in-place sorts, and the salary
//! statistics. Every operation is a linear scan over the records.

mod sorting;
mod statistics;
mod store;

pub use sorting::compare_names;
pub use store::Registry;
