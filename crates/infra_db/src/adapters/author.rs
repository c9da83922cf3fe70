//! PostgreSQL Author Adapter
//!
//! Implements `AuthorPort` on top of [`AuthorRepository`]. Phrase inserts are
//! exposed as an inherent method for seeding; the port itself never writes
//! phrases.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{AuthorId, DomainPort, HealthCheckResult, HealthCheckable, PhraseId, PortError};
use domain_authors::{Author, AuthorPort, NewAuthor, NewPhrase, Phrase};

use crate::repositories::{AuthorRepository, AuthorRow, PhraseRepository, PhraseRow};

/// PostgreSQL-backed implementation of the AuthorPort trait
#[derive(Debug, Clone)]
pub struct PostgresAuthorAdapter {
    repository: AuthorRepository,
    phrases: PhraseRepository,
    pool: PgPool,
}

impl PostgresAuthorAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AuthorRepository::new(pool.clone()),
            phrases: PhraseRepository::new(pool.clone()),
            pool,
        }
    }

    /// Stores a phrase for an existing author
    ///
    /// An unknown author is reported as a conflict by the foreign key.
    #[instrument(skip(self, phrase), fields(author_id = %phrase.author_id))]
    pub async fn insert_phrase(&self, phrase: NewPhrase) -> Result<Phrase, PortError> {
        let row = PhraseRow {
            id: Uuid::now_v7(),
            content: phrase.content,
            source: phrase.source,
            author_id: phrase.author_id.into(),
        };
        let stored = self.phrases.insert(&row).await?;
        Ok(row_to_phrase(stored))
    }
}

impl DomainPort for PostgresAuthorAdapter {}

#[async_trait]
impl HealthCheckable for PostgresAuthorAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-author-adapter").await
    }
}

#[async_trait]
impl AuthorPort for PostgresAuthorAdapter {
    #[instrument(skip(self, author), fields(slug = %author.slug))]
    async fn create_author(&self, author: NewAuthor) -> Result<Author, PortError> {
        debug!("Inserting author");

        let row = AuthorRow {
            id: Uuid::now_v7(),
            name: author.name,
            slug: author.slug,
            description: author.description,
        };
        let stored = self.repository.insert(&row).await?;
        Ok(row_to_author(stored))
    }

    #[instrument(skip(self, id), fields(author_id = %id))]
    async fn find_author(&self, id: AuthorId) -> Result<Option<Author>, PortError> {
        let row = self.repository.find_by_id(id.into()).await?;
        Ok(row.map(row_to_author))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_authors_by_ids(&self, ids: &[AuthorId]) -> Result<Vec<Author>, PortError> {
        let ids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows = self.repository.find_by_ids(&ids).await?;
        debug!(found = rows.len(), "Authors fetched");
        Ok(rows.into_iter().map(row_to_author).collect())
    }
}

pub(crate) fn row_to_author(row: AuthorRow) -> Author {
    Author {
        id: AuthorId::from(row.id),
        name: row.name,
        slug: row.slug,
        description: row.description,
    }
}

pub(crate) fn row_to_phrase(row: PhraseRow) -> Phrase {
    Phrase {
        id: PhraseId::from(row.id),
        content: row.content,
        source: row.source,
        author_id: AuthorId::from(row.author_id),
    }
}
