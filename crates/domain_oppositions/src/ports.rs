//! Oppositions Domain Ports
//!
//! `OppositionPort` covers the opposition table and the joined projections
//! the service reads. Author lookups go through `domain_authors::AuthorPort`,
//! which the service receives separately.

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, OppositionId, PortError};

use crate::opposition::{
    NewOpposition, Opposition, OppositionChanges, OppositionDetail, OppositionPhrases,
    OppositionQuery,
};

/// The store operations available on oppositions
#[async_trait]
pub trait OppositionPort: DomainPort + HealthCheckable {
    /// Persists a new opposition and returns the stored row
    async fn create_opposition(&self, opposition: NewOpposition) -> Result<Opposition, PortError>;

    /// Fetches the bare row; `Ok(None)` when it does not exist
    async fn find_opposition(&self, id: OppositionId) -> Result<Option<Opposition>, PortError>;

    /// Fetches the opposition with both authors expanded
    async fn find_opposition_detail(
        &self,
        id: OppositionId,
    ) -> Result<Option<OppositionDetail>, PortError>;

    /// Lists expanded oppositions matching `query`, ordered by slug then id
    async fn find_opposition_details(
        &self,
        query: OppositionQuery,
    ) -> Result<Vec<OppositionDetail>, PortError>;

    /// Applies a partial update and returns the updated row
    async fn update_opposition(
        &self,
        id: OppositionId,
        changes: OppositionChanges,
    ) -> Result<Opposition, PortError>;

    /// Deletes the row and returns it as it was before deletion
    async fn delete_opposition(&self, id: OppositionId) -> Result<Opposition, PortError>;

    /// Fetches the slug plus both authors with all of their phrases
    async fn find_opposition_phrases(
        &self,
        id: OppositionId,
    ) -> Result<Option<OppositionPhrases>, PortError>;
}

/// In-memory implementation of OppositionPort for testing
///
/// Joins are resolved against a shared [`MockAuthorPort`], mirroring the
/// foreign keys of the real schema: creating or updating an opposition that
/// references an unknown author fails with a conflict.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::{AuthorId, HealthCheckResult};
    use domain_authors::MockAuthorPort;

    use crate::opposition::{AuthorSummary, AuthorWithPhrases};

    #[derive(Debug, Clone)]
    pub struct MockOppositionPort {
        authors: MockAuthorPort,
        oppositions: Arc<RwLock<HashMap<OppositionId, Opposition>>>,
        unavailable: Arc<AtomicBool>,
        writes: Arc<AtomicUsize>,
    }

    impl MockOppositionPort {
        /// Creates an empty opposition store joined to `authors`
        pub fn new(authors: MockAuthorPort) -> Self {
            Self {
                authors,
                oppositions: Arc::new(RwLock::new(HashMap::new())),
                unavailable: Arc::new(AtomicBool::new(false)),
                writes: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// Inserts a row directly, bypassing the write counter
        pub async fn insert_opposition(&self, opposition: Opposition) {
            self.oppositions.write().await.insert(opposition.id, opposition);
        }

        /// Returns a row without going through the port
        pub async fn opposition(&self, id: OppositionId) -> Option<Opposition> {
            self.oppositions.read().await.get(&id).cloned()
        }

        pub async fn opposition_count(&self) -> usize {
            self.oppositions.read().await.len()
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
                return Err(PortError::connection("mock opposition store unavailable"));
            }
            Ok(())
        }

        async fn summary(&self, id: AuthorId) -> Result<AuthorSummary, PortError> {
            self.authors
                .author(id)
                .await
                .map(|author| AuthorSummary::from(&author))
                .ok_or_else(|| PortError::internal(format!("dangling author reference {}", id)))
        }

        async fn ensure_author(&self, id: AuthorId) -> Result<(), PortError> {
            match self.authors.author(id).await {
                Some(_) => Ok(()),
                None => Err(PortError::conflict(format!("author {} does not exist", id))),
            }
        }

        async fn detail(&self, opposition: &Opposition) -> Result<OppositionDetail, PortError> {
            Ok(OppositionDetail {
                id: opposition.id,
                slug: opposition.slug.clone(),
                first_author: self.summary(opposition.first_author_id).await?,
                second_author: self.summary(opposition.second_author_id).await?,
            })
        }
    }

    impl DomainPort for MockOppositionPort {}

    #[async_trait]
    impl HealthCheckable for MockOppositionPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-opposition-port")
        }
    }

    #[async_trait]
    impl OppositionPort for MockOppositionPort {
        async fn create_opposition(
            &self,
            opposition: NewOpposition,
        ) -> Result<Opposition, PortError> {
            self.check_available()?;
            self.ensure_author(opposition.first_author_id).await?;
            self.ensure_author(opposition.second_author_id).await?;

            let opposition = opposition.into_opposition(OppositionId::new_v7());
            self.oppositions
                .write()
                .await
                .insert(opposition.id, opposition.clone());
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(opposition)
        }

        async fn find_opposition(
            &self,
            id: OppositionId,
        ) -> Result<Option<Opposition>, PortError> {
            self.check_available()?;
            Ok(self.oppositions.read().await.get(&id).cloned())
        }

        async fn find_opposition_detail(
            &self,
            id: OppositionId,
        ) -> Result<Option<OppositionDetail>, PortError> {
            self.check_available()?;
            let row = self.oppositions.read().await.get(&id).cloned();
            match row {
                Some(opposition) => Ok(Some(self.detail(&opposition).await?)),
                None => Ok(None),
            }
        }

        async fn find_opposition_details(
            &self,
            query: OppositionQuery,
        ) -> Result<Vec<OppositionDetail>, PortError> {
            self.check_available()?;
            let mut rows: Vec<Opposition> = self
                .oppositions
                .read()
                .await
                .values()
                .filter(|o| query.matches(&o.slug))
                .cloned()
                .collect();
            rows.sort_by(|a, b| a.slug.cmp(&b.slug).then(a.id.cmp(&b.id)));

            let mut details = Vec::with_capacity(rows.len());
            for row in &rows {
                details.push(self.detail(row).await?);
            }
            Ok(details)
        }

        async fn update_opposition(
            &self,
            id: OppositionId,
            changes: OppositionChanges,
        ) -> Result<Opposition, PortError> {
            self.check_available()?;
            if let Some(first) = changes.first_author_id {
                self.ensure_author(first).await?;
            }
            if let Some(second) = changes.second_author_id {
                self.ensure_author(second).await?;
            }

            let mut oppositions = self.oppositions.write().await;
            let opposition = oppositions
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Opposition", id))?;
            changes.apply_to(opposition);
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(opposition.clone())
        }

        async fn delete_opposition(&self, id: OppositionId) -> Result<Opposition, PortError> {
            self.check_available()?;
            let removed = self
                .oppositions
                .write()
                .await
                .remove(&id)
                .ok_or_else(|| PortError::not_found("Opposition", id))?;
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(removed)
        }

        async fn find_opposition_phrases(
            &self,
            id: OppositionId,
        ) -> Result<Option<OppositionPhrases>, PortError> {
            self.check_available()?;
            let Some(opposition) = self.oppositions.read().await.get(&id).cloned() else {
                return Ok(None);
            };

            let first = self.summary(opposition.first_author_id).await?;
            let second = self.summary(opposition.second_author_id).await?;
            let first_phrases = self.authors.phrases_for(first.id).await;
            let second_phrases = self.authors.phrases_for(second.id).await;

            Ok(Some(OppositionPhrases {
                slug: opposition.slug,
                first_author: AuthorWithPhrases::new(first, first_phrases),
                second_author: AuthorWithPhrases::new(second, second_phrases),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockOppositionPort;
    use super::*;
    use core_kernel::AuthorId;
    use domain_authors::{AuthorPort, MockAuthorPort, NewAuthor};

    async fn seeded() -> (MockOppositionPort, AuthorId, AuthorId) {
        let authors = MockAuthorPort::new();
        let a = authors.create_author(NewAuthor::from_name("Plato")).await.unwrap();
        let b = authors.create_author(NewAuthor::from_name("Aristotle")).await.unwrap();
        (MockOppositionPort::new(authors), a.id, b.id)
    }

    #[tokio::test]
    async fn test_mock_port_create_and_detail() {
        let (port, a, b) = seeded().await;
        let created = port
            .create_opposition(NewOpposition {
                slug: "plato-aristotle".into(),
                first_author_id: a,
                second_author_id: b,
            })
            .await
            .unwrap();

        let detail = port.find_opposition_detail(created.id).await.unwrap().unwrap();
        assert_eq!(detail.first_author.name, "Plato");
        assert_eq!(detail.second_author.name, "Aristotle");
    }

    #[tokio::test]
    async fn test_mock_port_rejects_unknown_author() {
        let (port, a, _) = seeded().await;
        let result = port
            .create_opposition(NewOpposition {
                slug: "x".into(),
                first_author_id: a,
                second_author_id: AuthorId::new(),
            })
            .await;
        assert!(matches!(result, Err(PortError::Conflict { .. })));
        assert_eq!(port.write_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_port_delete_missing_is_not_found() {
        let (port, _, _) = seeded().await;
        let result = port.delete_opposition(OppositionId::new()).await;
        assert!(result.unwrap_err().is_not_found());
    }
}
