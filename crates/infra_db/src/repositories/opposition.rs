//! Opposition repository
//!
//! Besides the bare table operations this repository serves the joined
//! "detail" rows: an opposition with the id, name and description of both of
//! its authors.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

#[derive(Debug, Clone)]
pub struct OppositionRepository {
    pool: PgPool,
}

impl OppositionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, row: &OppositionRow) -> Result<OppositionRow, DatabaseError> {
        let opposition = sqlx::query_as::<_, OppositionRow>(
            r#"
            INSERT INTO oppositions (id, slug, first_author_id, second_author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, slug, first_author_id, second_author_id
            "#,
        )
        .bind(row.id)
        .bind(&row.slug)
        .bind(row.first_author_id)
        .bind(row.second_author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(opposition)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<OppositionRow>, DatabaseError> {
        let opposition = sqlx::query_as::<_, OppositionRow>(
            r#"
            SELECT id, slug, first_author_id, second_author_id
            FROM oppositions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(opposition)
    }

    pub async fn find_detail_by_id(&self, id: Uuid) -> Result<Option<OppositionDetailRow>, DatabaseError> {
        let detail = sqlx::query_as::<_, OppositionDetailRow>(
            r#"
            SELECT
                o.id,
                o.slug,
                fa.id AS first_author_id,
                fa.name AS first_author_name,
                fa.description AS first_author_description,
                sa.id AS second_author_id,
                sa.name AS second_author_name,
                sa.description AS second_author_description
            FROM oppositions o
            JOIN authors fa ON fa.id = o.first_author_id
            JOIN authors sa ON sa.id = o.second_author_id
            WHERE o.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(detail)
    }

    /// Lists detail rows ordered by slug (byte order) then id
    ///
    /// With `slug_fragment` set, only rows whose slug contains it are
    /// returned. `strpos` keeps the match literal and case-sensitive.
    pub async fn find_details(
        &self,
        slug_fragment: Option<&str>,
    ) -> Result<Vec<OppositionDetailRow>, DatabaseError> {
        let details = sqlx::query_as::<_, OppositionDetailRow>(
            r#"
            SELECT
                o.id,
                o.slug,
                fa.id AS first_author_id,
                fa.name AS first_author_name,
                fa.description AS first_author_description,
                sa.id AS second_author_id,
                sa.name AS second_author_name,
                sa.description AS second_author_description
            FROM oppositions o
            JOIN authors fa ON fa.id = o.first_author_id
            JOIN authors sa ON sa.id = o.second_author_id
            WHERE $1::text IS NULL OR strpos(o.slug, $1) > 0
            ORDER BY o.slug COLLATE "C", o.id
            "#,
        )
        .bind(slug_fragment)
        .fetch_all(&self.pool)
        .await?;

        Ok(details)
    }

    /// Writes the slug and whichever author ids are given
    ///
    /// Returns `Ok(None)` when no row has the id.
    pub async fn update(
        &self,
        id: Uuid,
        first_author_id: Option<Uuid>,
        second_author_id: Option<Uuid>,
        slug: &str,
    ) -> Result<Option<OppositionRow>, DatabaseError> {
        let opposition = sqlx::query_as::<_, OppositionRow>(
            r#"
            UPDATE oppositions
            SET
                slug = $2,
                first_author_id = COALESCE($3, first_author_id),
                second_author_id = COALESCE($4, second_author_id)
            WHERE id = $1
            RETURNING id, slug, first_author_id, second_author_id
            "#,
        )
        .bind(id)
        .bind(slug)
        .bind(first_author_id)
        .bind(second_author_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(opposition)
    }

    /// Deletes the row, returning it as it was; `Ok(None)` when absent
    pub async fn delete(&self, id: Uuid) -> Result<Option<OppositionRow>, DatabaseError> {
        let opposition = sqlx::query_as::<_, OppositionRow>(
            r#"
            DELETE FROM oppositions
            WHERE id = $1
            RETURNING id, slug, first_author_id, second_author_id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(opposition)
    }
}

/// Database row for an opposition
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct OppositionRow {
    pub id: Uuid,
    pub slug: String,
    pub first_author_id: Uuid,
    pub second_author_id: Uuid,
}

/// An opposition joined with both of its authors
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct OppositionDetailRow {
    pub id: Uuid,
    pub slug: String,
    pub first_author_id: Uuid,
    pub first_author_name: String,
    pub first_author_description: Option<String>,
    pub second_author_id: Uuid,
    pub second_author_name: String,
    pub second_author_description: Option<String>,
}
