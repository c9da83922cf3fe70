//! Core Kernel - Foundational types shared by the authors and oppositions domains
//!
//! This crate provides the building blocks every other crate depends on:
//! - Strongly-typed identifiers for authors, oppositions and phrases
//! - Port infrastructure (errors, health checks) for swappable store adapters
//! - The uniform service envelope (`{code, data, message}`)
//! - Slug derivation and required-field validation

pub mod identifiers;
pub mod ports;
pub mod envelope;
pub mod slug;
pub mod validation;

pub use identifiers::{AuthorId, OppositionId, PhraseId};
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
pub use envelope::{Envelope, ServiceOutcome, SuccessStatus, FailureKind};
pub use slug::{slugify, slugify_parts};
pub use validation::{validate_fields, Field};
