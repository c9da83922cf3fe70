//! Phrases attributed to an author

use serde::{Deserialize, Serialize};

use core_kernel::{AuthorId, PhraseId};

/// A quoted piece of content belonging to exactly one author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    pub id: PhraseId,
    pub content: String,
    pub source: String,
    pub author_id: AuthorId,
}

/// Data for a new phrase row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhrase {
    pub content: String,
    pub source: String,
    pub author_id: AuthorId,
}

impl NewPhrase {
    pub fn new(author_id: AuthorId, content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
            author_id,
        }
    }

    pub fn into_phrase(self, id: PhraseId) -> Phrase {
        Phrase {
            id,
            content: self.content,
            source: self.source,
            author_id: self.author_id,
        }
    }
}
