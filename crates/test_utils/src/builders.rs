//! Test Data Builders
//!
//! Builders for insert payloads. Unset fields are filled with generated
//! values from `fake`, so tests only spell out what they assert on.

use fake::faker::lorem::en::{Sentence, Words};
use fake::faker::name::en::Name;
use fake::Fake;

use core_kernel::AuthorId;
use domain_authors::{NewAuthor, NewPhrase};

/// Builder for new authors
#[derive(Debug, Clone, Default)]
pub struct AuthorBuilder {
    name: Option<String>,
    description: Option<String>,
}

impl AuthorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds the payload; the slug is derived from the name
    pub fn build(self) -> NewAuthor {
        let name = self.name.unwrap_or_else(|| Name().fake());
        NewAuthor::from_name(name).with_description(self.description)
    }
}

/// Builder for new phrases
#[derive(Debug, Clone, Default)]
pub struct PhraseBuilder {
    content: Option<String>,
    source: Option<String>,
}

impl PhraseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Builds a phrase attributed to `author_id`
    pub fn build(self, author_id: AuthorId) -> NewPhrase {
        let content = self.content.unwrap_or_else(|| Sentence(4..10).fake());
        let source = self.source.unwrap_or_else(|| {
            let words: Vec<String> = Words(1..4).fake();
            words.join(" ")
        });
        NewPhrase::new(author_id, content, source)
    }
}
