//! Opposition records and the projections read back from the store

use serde::{Deserialize, Serialize};

use core_kernel::{AuthorId, OppositionId};
use domain_authors::{Author, Phrase};

/// An opposition row as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opposition {
    pub id: OppositionId,
    pub slug: String,
    pub first_author_id: AuthorId,
    pub second_author_id: AuthorId,
}

/// The author fields exposed alongside an opposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: AuthorId,
    pub name: String,
    pub description: Option<String>,
}

impl From<&Author> for AuthorSummary {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.name.clone(),
            description: author.description.clone(),
        }
    }
}

/// Opposition with both authors expanded; returned by the read operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OppositionDetail {
    pub id: OppositionId,
    pub slug: String,
    pub first_author: AuthorSummary,
    pub second_author: AuthorSummary,
}

/// An author with every phrase attributed to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorWithPhrases {
    pub id: AuthorId,
    pub name: String,
    pub description: Option<String>,
    pub phrases: Vec<Phrase>,
}

impl AuthorWithPhrases {
    pub fn new(author: AuthorSummary, phrases: Vec<Phrase>) -> Self {
        Self {
            id: author.id,
            name: author.name,
            description: author.description,
            phrases,
        }
    }
}

/// The phrases of both sides of an opposition, keyed by its slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OppositionPhrases {
    pub slug: String,
    pub first_author: AuthorWithPhrases,
    pub second_author: AuthorWithPhrases,
}

/// Data for a new opposition row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOpposition {
    pub slug: String,
    pub first_author_id: AuthorId,
    pub second_author_id: AuthorId,
}

impl NewOpposition {
    pub fn into_opposition(self, id: OppositionId) -> Opposition {
        Opposition {
            id,
            slug: self.slug,
            first_author_id: self.first_author_id,
            second_author_id: self.second_author_id,
        }
    }
}

/// Partial update of an opposition
///
/// `None` author ids leave the stored foreign key untouched. The slug is
/// always written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OppositionChanges {
    pub first_author_id: Option<AuthorId>,
    pub second_author_id: Option<AuthorId>,
    pub slug: String,
}

impl OppositionChanges {
    pub fn apply_to(&self, opposition: &mut Opposition) {
        if let Some(first) = self.first_author_id {
            opposition.first_author_id = first;
        }
        if let Some(second) = self.second_author_id {
            opposition.second_author_id = second;
        }
        opposition.slug = self.slug.clone();
    }
}

/// Filter for listing oppositions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OppositionQuery {
    /// Case-sensitive substring the slug must contain
    pub slug_contains: Option<String>,
}

impl OppositionQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn slug_contains(fragment: impl Into<String>) -> Self {
        Self {
            slug_contains: Some(fragment.into()),
        }
    }

    pub fn matches(&self, slug: &str) -> bool {
        self.slug_contains
            .as_deref()
            .map_or(true, |fragment| slug.contains(fragment))
    }
}
