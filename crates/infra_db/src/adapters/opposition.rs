//! PostgreSQL Opposition Adapter
//!
//! Implements `OppositionPort` on top of [`OppositionRepository`], reading the
//! author side of each projection through SQL joins.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{AuthorId, DomainPort, HealthCheckResult, HealthCheckable, OppositionId, PortError};
use domain_authors::Phrase;
use domain_oppositions::{
    AuthorSummary, AuthorWithPhrases, NewOpposition, Opposition, OppositionChanges,
    OppositionDetail, OppositionPhrases, OppositionPort, OppositionQuery,
};

use super::author::row_to_phrase;
use crate::repositories::{OppositionDetailRow, OppositionRepository, OppositionRow, PhraseRepository};

/// PostgreSQL-backed implementation of the OppositionPort trait
#[derive(Debug, Clone)]
pub struct PostgresOppositionAdapter {
    repository: OppositionRepository,
    phrases: PhraseRepository,
    pool: PgPool,
}

impl PostgresOppositionAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OppositionRepository::new(pool.clone()),
            phrases: PhraseRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresOppositionAdapter {}

#[async_trait]
impl HealthCheckable for PostgresOppositionAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-opposition-adapter").await
    }
}

#[async_trait]
impl OppositionPort for PostgresOppositionAdapter {
    #[instrument(skip(self, opposition), fields(slug = %opposition.slug))]
    async fn create_opposition(&self, opposition: NewOpposition) -> Result<Opposition, PortError> {
        debug!("Inserting opposition");

        let row = OppositionRow {
            id: Uuid::now_v7(),
            slug: opposition.slug,
            first_author_id: opposition.first_author_id.into(),
            second_author_id: opposition.second_author_id.into(),
        };
        let stored = self.repository.insert(&row).await?;
        Ok(row_to_opposition(stored))
    }

    #[instrument(skip(self, id), fields(opposition_id = %id))]
    async fn find_opposition(&self, id: OppositionId) -> Result<Option<Opposition>, PortError> {
        let row = self.repository.find_by_id(id.into()).await?;
        Ok(row.map(row_to_opposition))
    }

    #[instrument(skip(self, id), fields(opposition_id = %id))]
    async fn find_opposition_detail(
        &self,
        id: OppositionId,
    ) -> Result<Option<OppositionDetail>, PortError> {
        let row = self.repository.find_detail_by_id(id.into()).await?;
        Ok(row.map(row_to_detail))
    }

    #[instrument(skip(self))]
    async fn find_opposition_details(
        &self,
        query: OppositionQuery,
    ) -> Result<Vec<OppositionDetail>, PortError> {
        let rows = self
            .repository
            .find_details(query.slug_contains.as_deref())
            .await?;
        debug!(count = rows.len(), "Oppositions fetched");
        Ok(rows.into_iter().map(row_to_detail).collect())
    }

    #[instrument(skip(self, id, changes), fields(opposition_id = %id))]
    async fn update_opposition(
        &self,
        id: OppositionId,
        changes: OppositionChanges,
    ) -> Result<Opposition, PortError> {
        let row = self
            .repository
            .update(
                id.into(),
                changes.first_author_id.map(Uuid::from),
                changes.second_author_id.map(Uuid::from),
                &changes.slug,
            )
            .await?
            .ok_or_else(|| PortError::not_found("Opposition", id))?;
        Ok(row_to_opposition(row))
    }

    #[instrument(skip(self, id), fields(opposition_id = %id))]
    async fn delete_opposition(&self, id: OppositionId) -> Result<Opposition, PortError> {
        let row = self
            .repository
            .delete(id.into())
            .await?
            .ok_or_else(|| PortError::not_found("Opposition", id))?;
        Ok(row_to_opposition(row))
    }

    #[instrument(skip(self, id), fields(opposition_id = %id))]
    async fn find_opposition_phrases(
        &self,
        id: OppositionId,
    ) -> Result<Option<OppositionPhrases>, PortError> {
        let Some(detail) = self.repository.find_detail_by_id(id.into()).await? else {
            return Ok(None);
        };

        let phrases = self
            .phrases
            .find_by_author_ids(&[detail.first_author_id, detail.second_author_id])
            .await?;
        debug!(count = phrases.len(), "Phrases fetched");

        let detail = row_to_detail(detail);
        let phrases: Vec<Phrase> = phrases.into_iter().map(row_to_phrase).collect();
        let first = phrases_of(&phrases, detail.first_author.id);
        let second = phrases_of(&phrases, detail.second_author.id);

        Ok(Some(OppositionPhrases {
            slug: detail.slug,
            first_author: AuthorWithPhrases::new(detail.first_author, first),
            second_author: AuthorWithPhrases::new(detail.second_author, second),
        }))
    }
}

/// Each side gets every phrase of its author, even when both sides share one
fn phrases_of(phrases: &[Phrase], author_id: AuthorId) -> Vec<Phrase> {
    phrases
        .iter()
        .filter(|phrase| phrase.author_id == author_id)
        .cloned()
        .collect()
}

fn row_to_opposition(row: OppositionRow) -> Opposition {
    Opposition {
        id: OppositionId::from(row.id),
        slug: row.slug,
        first_author_id: AuthorId::from(row.first_author_id),
        second_author_id: AuthorId::from(row.second_author_id),
    }
}

fn row_to_detail(row: OppositionDetailRow) -> OppositionDetail {
    OppositionDetail {
        id: OppositionId::from(row.id),
        slug: row.slug,
        first_author: AuthorSummary {
            id: AuthorId::from(row.first_author_id),
            name: row.first_author_name,
            description: row.first_author_description,
        },
        second_author: AuthorSummary {
            id: AuthorId::from(row.second_author_id),
            name: row.second_author_name,
            description: row.second_author_description,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::PhraseId;

    #[test]
    fn test_detail_row_splits_into_both_authors() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let detail = row_to_detail(OppositionDetailRow {
            id: Uuid::new_v4(),
            slug: "plato-aristotle".into(),
            first_author_id: first,
            first_author_name: "Plato".into(),
            first_author_description: None,
            second_author_id: second,
            second_author_name: "Aristotle".into(),
            second_author_description: Some("Stagirite".into()),
        });

        assert_eq!(detail.first_author.id, AuthorId::from(first));
        assert_eq!(detail.first_author.name, "Plato");
        assert_eq!(detail.second_author.id, AuthorId::from(second));
        assert_eq!(detail.second_author.description.as_deref(), Some("Stagirite"));
    }

    #[test]
    fn test_phrases_of_keeps_shared_author_on_both_sides() {
        let plato = AuthorId::new();
        let aristotle = AuthorId::new();
        let phrase = |author_id| Phrase {
            id: PhraseId::new(),
            content: "Know thyself.".into(),
            source: "Dialogues".into(),
            author_id,
        };
        let phrases = vec![phrase(plato), phrase(aristotle), phrase(plato)];

        assert_eq!(phrases_of(&phrases, plato).len(), 2);
        assert_eq!(phrases_of(&phrases, aristotle), vec![phrases[1].clone()]);
        assert!(phrases_of(&phrases, AuthorId::new()).is_empty());
    }
}
