//! Phrase repository
//!
//! Phrases are only written when seeding; the service reads them through the
//! opposition adapter.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

#[derive(Debug, Clone)]
pub struct PhraseRepository {
    pool: PgPool,
}

impl PhraseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, row: &PhraseRow) -> Result<PhraseRow, DatabaseError> {
        let phrase = sqlx::query_as::<_, PhraseRow>(
            r#"
            INSERT INTO phrases (id, content, source, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, source, author_id
            "#,
        )
        .bind(row.id)
        .bind(&row.content)
        .bind(&row.source)
        .bind(row.author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(phrase)
    }

    /// Phrases of the given authors, oldest first
    ///
    /// Phrase ids are UUIDv7, so ordering by id follows insertion order.
    pub async fn find_by_author_ids(&self, author_ids: &[Uuid]) -> Result<Vec<PhraseRow>, DatabaseError> {
        let phrases = sqlx::query_as::<_, PhraseRow>(
            r#"
            SELECT id, content, source, author_id
            FROM phrases
            WHERE author_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(author_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(phrases)
    }
}

/// Database row for a phrase
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PhraseRow {
    pub id: Uuid,
    pub content: String,
    pub source: String,
    pub author_id: Uuid,
}
