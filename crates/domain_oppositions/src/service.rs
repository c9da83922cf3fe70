//! Oppositions service
//!
//! Orchestrates validation, author existence checks, slug derivation and the
//! store calls for oppositions. Every operation answers with a
//! [`ServiceOutcome`]; nothing is propagated to the caller as an error.
//!
//! Existence checks and the writes that depend on them are separate store
//! calls. A concurrent caller may delete an author in between; the write then
//! fails in the store and is reported as an internal error.

use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use core_kernel::envelope::messages;
use core_kernel::{
    slugify_parts, validate_fields, AuthorId, Field, OppositionId, PortError, ServiceOutcome,
};
use domain_authors::AuthorPort;

use crate::opposition::{
    NewOpposition, Opposition, OppositionChanges, OppositionDetail, OppositionPhrases,
    OppositionQuery,
};
use crate::ports::OppositionPort;

pub const AUTHORS_NOT_FOUND: &str = "One or both authors not found.";
pub const FIRST_AUTHOR_NOT_FOUND: &str = "First author not found.";
pub const SECOND_AUTHOR_NOT_FOUND: &str = "Second author not found.";

/// Input of [`OppositionsService::create`]
///
/// Ids arrive as caller-supplied text; blank or absent values fail validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOppositionRequest {
    pub first_author_id: Option<String>,
    pub second_author_id: Option<String>,
}

impl CreateOppositionRequest {
    pub fn new(first_author_id: impl Into<String>, second_author_id: impl Into<String>) -> Self {
        Self {
            first_author_id: Some(first_author_id.into()),
            second_author_id: Some(second_author_id.into()),
        }
    }
}

/// Input of [`OppositionsService::update_one`]
///
/// An absent or blank id leaves that side of the opposition unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOppositionRequest {
    pub first_author_id: Option<String>,
    pub second_author_id: Option<String>,
}

impl UpdateOppositionRequest {
    pub fn first(id: impl Into<String>) -> Self {
        Self {
            first_author_id: Some(id.into()),
            second_author_id: None,
        }
    }

    pub fn second(id: impl Into<String>) -> Self {
        Self {
            first_author_id: None,
            second_author_id: Some(id.into()),
        }
    }
}

#[derive(Clone)]
pub struct OppositionsService {
    oppositions: Arc<dyn OppositionPort>,
    authors: Arc<dyn AuthorPort>,
}

impl OppositionsService {
    pub fn new(oppositions: Arc<dyn OppositionPort>, authors: Arc<dyn AuthorPort>) -> Self {
        Self { oppositions, authors }
    }

    /// Creates an opposition between two existing, distinct authors
    ///
    /// Both authors are fetched in one lookup and resolved by role, so the
    /// slug is always `<first name> <second name>` regardless of the order the
    /// store returns them in. Supplying the same author twice resolves to a
    /// single author and is rejected as not found.
    #[instrument(skip(self))]
    pub async fn create(&self, request: CreateOppositionRequest) -> ServiceOutcome<Opposition> {
        let first_raw = request.first_author_id.as_deref();
        let second_raw = request.second_author_id.as_deref();
        if let Some(message) = validate_fields(&[
            Field::new(first_raw, "firstAuthorId"),
            Field::new(second_raw, "secondAuthorId"),
        ]) {
            return ServiceOutcome::validation(message);
        }

        let (Some(first_id), Some(second_id)) = (parse_author_id(first_raw), parse_author_id(second_raw))
        else {
            return ServiceOutcome::not_found(AUTHORS_NOT_FOUND);
        };

        let authors = match self.authors.find_authors_by_ids(&[first_id, second_id]).await {
            Ok(authors) => authors,
            Err(e) => return store_failure("create", e, messages::SERVER_INTERNAL_ERROR),
        };

        let first = authors.iter().find(|a| a.id == first_id);
        let second = authors.iter().find(|a| a.id == second_id);
        let (Some(first), Some(second)) = (first, second) else {
            return ServiceOutcome::not_found(AUTHORS_NOT_FOUND);
        };
        if first.id == second.id {
            return ServiceOutcome::not_found(AUTHORS_NOT_FOUND);
        }

        let new_opposition = NewOpposition {
            slug: slugify_parts([first.name.as_str(), second.name.as_str()]),
            first_author_id: first_id,
            second_author_id: second_id,
        };

        match self.oppositions.create_opposition(new_opposition).await {
            Ok(opposition) => {
                info!(opposition_id = %opposition.id, slug = %opposition.slug, "Opposition created");
                ServiceOutcome::created(opposition)
            }
            Err(e) => store_failure("create", e, messages::SERVER_INTERNAL_ERROR),
        }
    }

    /// Fetches one opposition with both authors expanded
    #[instrument(skip(self, id), fields(opposition_id = %id))]
    pub async fn find_by_id(&self, id: OppositionId) -> ServiceOutcome<OppositionDetail> {
        match self.oppositions.find_opposition_detail(id).await {
            Ok(Some(detail)) => ServiceOutcome::ok(detail, messages::FOUND),
            Ok(None) => ServiceOutcome::not_found(messages::NOT_FOUND),
            Err(e) => store_failure("find_by_id", e, messages::INTERNAL_SERVER_ERROR),
        }
    }

    /// Lists oppositions, optionally only those whose slug contains `query`
    ///
    /// An empty result is still a success.
    #[instrument(skip(self))]
    pub async fn find_many(&self, query: Option<&str>) -> ServiceOutcome<Vec<OppositionDetail>> {
        let filter = match query {
            Some(fragment) if !fragment.is_empty() => OppositionQuery::slug_contains(fragment),
            _ => OppositionQuery::all(),
        };

        match self.oppositions.find_opposition_details(filter).await {
            Ok(details) => {
                debug!(count = details.len(), "Oppositions listed");
                ServiceOutcome::ok(details, messages::FOUND_MANY)
            }
            Err(e) => store_failure("find_many", e, messages::INTERNAL_SERVER_ERROR),
        }
    }

    /// Re-points one or both sides of an opposition and recomputes its slug
    ///
    /// The slug is rebuilt from the new author's name for each side that is
    /// supplied and the current author's name for each side that is not. Only
    /// supplied sides are written.
    #[instrument(skip(self, id), fields(opposition_id = %id))]
    pub async fn update_one(
        &self,
        id: OppositionId,
        request: UpdateOppositionRequest,
    ) -> ServiceOutcome<Opposition> {
        let current = match self.oppositions.find_opposition_detail(id).await {
            Ok(Some(detail)) => detail,
            Ok(None) => return ServiceOutcome::not_found(messages::NOT_FOUND),
            Err(e) => return store_failure("update_one", e, messages::INTERNAL_SERVER_ERROR),
        };

        let mut first_name = current.first_author.name;
        let mut second_name = current.second_author.name;

        let first_author_id = match supplied(request.first_author_id.as_deref()) {
            Some(raw) => match self.resolve_author(raw).await {
                Ok(Some((author_id, name))) => {
                    first_name = name;
                    Some(author_id)
                }
                Ok(None) => return ServiceOutcome::not_found(FIRST_AUTHOR_NOT_FOUND),
                Err(e) => return store_failure("update_one", e, messages::INTERNAL_SERVER_ERROR),
            },
            None => None,
        };

        let second_author_id = match supplied(request.second_author_id.as_deref()) {
            Some(raw) => match self.resolve_author(raw).await {
                Ok(Some((author_id, name))) => {
                    second_name = name;
                    Some(author_id)
                }
                Ok(None) => return ServiceOutcome::not_found(SECOND_AUTHOR_NOT_FOUND),
                Err(e) => return store_failure("update_one", e, messages::INTERNAL_SERVER_ERROR),
            },
            None => None,
        };

        let changes = OppositionChanges {
            first_author_id,
            second_author_id,
            slug: slugify_parts([first_name.as_str(), second_name.as_str()]),
        };

        match self.oppositions.update_opposition(id, changes).await {
            Ok(opposition) => {
                info!(slug = %opposition.slug, "Opposition updated");
                ServiceOutcome::ok(opposition, messages::UPDATED)
            }
            Err(e) => store_failure("update_one", e, messages::INTERNAL_SERVER_ERROR),
        }
    }

    /// Deletes an existing opposition, answering with its last contents
    #[instrument(skip(self, id), fields(opposition_id = %id))]
    pub async fn delete_one(&self, id: OppositionId) -> ServiceOutcome<Opposition> {
        match self.oppositions.find_opposition(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return ServiceOutcome::not_found(messages::NOT_FOUND),
            Err(e) => return store_failure("delete_one", e, messages::INTERNAL_SERVER_ERROR),
        }

        match self.oppositions.delete_opposition(id).await {
            Ok(opposition) => {
                info!("Opposition deleted");
                ServiceOutcome::deleted(opposition)
            }
            Err(e) => store_failure("delete_one", e, messages::INTERNAL_SERVER_ERROR),
        }
    }

    /// Fetches both authors of an opposition with all of their phrases
    #[instrument(skip(self, id), fields(opposition_id = %id))]
    pub async fn find_phrases_by_opposition(
        &self,
        id: OppositionId,
    ) -> ServiceOutcome<OppositionPhrases> {
        match self.oppositions.find_opposition_phrases(id).await {
            Ok(Some(phrases)) => ServiceOutcome::ok(phrases, messages::FOUND),
            Ok(None) => ServiceOutcome::not_found(messages::NOT_FOUND),
            Err(e) => store_failure("find_phrases_by_opposition", e, messages::INTERNAL_SERVER_ERROR),
        }
    }

    /// Looks up a caller-supplied author id; unparseable ids resolve to nothing
    async fn resolve_author(&self, raw: &str) -> Result<Option<(AuthorId, String)>, PortError> {
        let Some(author_id) = AuthorId::parse_lenient(raw) else {
            return Ok(None);
        };
        Ok(self
            .authors
            .find_author(author_id)
            .await?
            .map(|author| (author.id, author.name)))
    }
}

fn parse_author_id(raw: Option<&str>) -> Option<AuthorId> {
    raw.and_then(AuthorId::parse_lenient)
}

fn supplied(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.trim().is_empty())
}

fn store_failure<T>(operation: &'static str, e: PortError, message: &'static str) -> ServiceOutcome<T> {
    error!(operation, error = %e, "Store call failed");
    ServiceOutcome::internal(message)
}
