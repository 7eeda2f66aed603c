//! core
//!
//! Core domain types and configuration for the catalog.
//!
//! # Modules
//!
//! - [`types`] - Record ids and entity records
//! - [`lookup`] - Tagged id-or-name lookup key
//! - [`keys`] - Primary-key generator
//! - [`config`] - Configuration schema and loading

pub mod config;
pub mod keys;
pub mod lookup;
pub mod types;
