//! Author records

use serde::{Deserialize, Serialize};

use core_kernel::{slugify, AuthorId};

/// An author as persisted by the store
///
/// The slug is derived from the name at creation time and is not guaranteed
/// to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// Data for a new author row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl NewAuthor {
    /// Builds the insert payload for `name`, deriving its slug
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            name,
            slug,
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Materializes the payload under a freshly assigned id
    pub fn into_author(self, id: AuthorId) -> Author {
        Author {
            id,
            name: self.name,
            slug: self.slug,
            description: self.description,
        }
    }
}
