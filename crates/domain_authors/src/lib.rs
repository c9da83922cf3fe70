//! Authors Domain
//!
//! Authors are the people whose phrases are collected and paired into
//! oppositions. This crate owns:
//!
//! - the `Author` and `Phrase` records as the store returns them;
//! - the `AuthorPort` trait the store adapters implement;
//! - the `AuthorsService`, which validates names, derives slugs and creates
//!   authors, answering with a `ServiceOutcome`.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # async fn demo() {
//! use std::sync::Arc;
//! use domain_authors::{AuthorsService, MockAuthorPort};
//!
//! let service = AuthorsService::new(Arc::new(MockAuthorPort::new()));
//! let outcome = service.create("Heraclitus").await;
//! assert_eq!(outcome.code(), 201);
//! assert_eq!(outcome.data().unwrap().slug, "heraclitus");
//! # }
//! ```

pub mod author;
pub mod phrase;
pub mod ports;
pub mod service;

pub use author::{Author, NewAuthor};
pub use phrase::{Phrase, NewPhrase};
pub use ports::AuthorPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockAuthorPort;
pub use service::AuthorsService;
