//! Author repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

#[derive(Debug, Clone)]
pub struct AuthorRepository {
    pool: PgPool,
}

impl AuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts an author and returns the stored row
    pub async fn insert(&self, row: &AuthorRow) -> Result<AuthorRow, DatabaseError> {
        let author = sqlx::query_as::<_, AuthorRow>(
            r#"
            INSERT INTO authors (id, name, slug, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, slug, description
            "#,
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.slug)
        .bind(&row.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(author)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthorRow>, DatabaseError> {
        let author = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, name, slug, description FROM authors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    /// Fetches every author whose id is in `ids`; missing ids are skipped
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AuthorRow>, DatabaseError> {
        let authors = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, name, slug, description
            FROM authors
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }
}

/// Database row for an author
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AuthorRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}
