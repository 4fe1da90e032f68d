//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! fee calculator test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built amounts, dates and invoice parts
//! - `builders`: Builder patterns for drafts and issued invoices
//! - `assertions`: Custom assertion helpers for fee and invoice figures
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
