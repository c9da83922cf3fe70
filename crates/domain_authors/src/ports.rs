//! Authors Domain Ports
//!
//! `AuthorPort` is everything the authors and oppositions services need from
//! the author store. Implementations:
//!
//! - **PostgreSQL adapter** (`infra_db::adapters::PostgresAuthorAdapter`)
//! - **Mock adapter** (`MockAuthorPort`, feature `mock`) for tests
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_authors::{AuthorPort, AuthorsService};
//!
//! let port: Arc<dyn AuthorPort> = Arc::new(PostgresAuthorAdapter::new(pool));
//! let service = AuthorsService::new(port);
//! ```

use async_trait::async_trait;

use core_kernel::{AuthorId, DomainPort, HealthCheckable, PortError};

use crate::author::{Author, NewAuthor};

/// The store operations available on authors
#[async_trait]
pub trait AuthorPort: DomainPort + HealthCheckable {
    /// Persists a new author and returns the stored record
    async fn create_author(&self, author: NewAuthor) -> Result<Author, PortError>;

    /// Looks up one author; `Ok(None)` when it does not exist
    async fn find_author(&self, id: AuthorId) -> Result<Option<Author>, PortError>;

    /// Fetches every author whose id is in `ids`, in one lookup
    ///
    /// Missing ids are skipped and no order is guaranteed.
    async fn find_authors_by_ids(&self, ids: &[AuthorId]) -> Result<Vec<Author>, PortError>;
}

/// In-memory implementation of AuthorPort for testing
///
/// Clones share the same underlying maps, so a clone handed to a service and
/// a clone kept by the test observe the same data.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::{HealthCheckResult, PhraseId};

    use crate::phrase::{NewPhrase, Phrase};

    #[derive(Debug, Clone, Default)]
    pub struct MockAuthorPort {
        authors: Arc<RwLock<HashMap<AuthorId, Author>>>,
        phrases: Arc<RwLock<Vec<Phrase>>>,
        unavailable: Arc<AtomicBool>,
        writes: Arc<AtomicUsize>,
    }

    impl MockAuthorPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Inserts an author directly, bypassing the write counter
        pub async fn insert_author(&self, author: Author) {
            self.authors.write().await.insert(author.id, author);
        }

        /// Inserts a phrase directly, bypassing the write counter
        pub async fn insert_phrase(&self, phrase: NewPhrase) -> Phrase {
            let phrase = phrase.into_phrase(PhraseId::new_v7());
            self.phrases.write().await.push(phrase.clone());
            phrase
        }

        /// Returns an author without going through the port
        pub async fn author(&self, id: AuthorId) -> Option<Author> {
            self.authors.read().await.get(&id).cloned()
        }

        /// Phrases of one author, in insertion order
        pub async fn phrases_for(&self, author_id: AuthorId) -> Vec<Phrase> {
            self.phrases
                .read()
                .await
                .iter()
                .filter(|p| p.author_id == author_id)
                .cloned()
                .collect()
        }

        pub async fn author_count(&self) -> usize {
            self.authors.read().await.len()
        }

        /// Makes every port call fail with a connection error
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        /// Number of writes performed through the port
        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        fn check_available(&self) -> Result<(), PortError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(PortError::connection("mock author store unavailable"));
            }
            Ok(())
        }
    }

    impl DomainPort for MockAuthorPort {}

    #[async_trait]
    impl HealthCheckable for MockAuthorPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-author-port")
        }
    }

    #[async_trait]
    impl AuthorPort for MockAuthorPort {
        async fn create_author(&self, author: NewAuthor) -> Result<Author, PortError> {
            self.check_available()?;
            let author = author.into_author(AuthorId::new_v7());
            self.authors.write().await.insert(author.id, author.clone());
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(author)
        }

        async fn find_author(&self, id: AuthorId) -> Result<Option<Author>, PortError> {
            self.check_available()?;
            Ok(self.authors.read().await.get(&id).cloned())
        }

        async fn find_authors_by_ids(&self, ids: &[AuthorId]) -> Result<Vec<Author>, PortError> {
            self.check_available()?;
            Ok(self
                .authors
                .read()
                .await
                .values()
                .filter(|author| ids.contains(&author.id))
                .cloned()
                .collect())
        }
    }
}
