//! Test Utilities Crate
//!
//! Shared test infrastructure for the oppositions workspace.
//!
//! # Modules
//!
//! - `fixtures`: Well-known authors and phrases
//! - `builders`: Builders for new records, with generated defaults
//! - `database`: PostgreSQL test container management
//! - `assertions`: Assertion helpers for envelopes
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod database;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use database::*;
pub use fixtures::*;
pub use generators::*;
