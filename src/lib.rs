//! In-memory employee registry.
//!
//! This crate provides an ordered collection of employee records with
//! id-keyed edits and deletes, name lookup and search, in-place sorting and
//! salary statistics.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
