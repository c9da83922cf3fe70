//! Authors service
//!
//! Validates author input, derives the slug and persists through the injected
//! [`AuthorPort`]. Every path ends in a [`ServiceOutcome`]; store failures are
//! logged and reported as a generic internal error.

use std::sync::Arc;

use tracing::{error, info, instrument};

use core_kernel::envelope::messages;
use core_kernel::ServiceOutcome;

use crate::author::{Author, NewAuthor};
use crate::ports::AuthorPort;

/// Returned when the author name is blank
pub const EMPTY_VALUES: &str = "Empty values.";

#[derive(Clone)]
pub struct AuthorsService {
    port: Arc<dyn AuthorPort>,
}

impl AuthorsService {
    pub fn new(port: Arc<dyn AuthorPort>) -> Self {
        Self { port }
    }

    /// Creates an author from its name
    ///
    /// - blank name: 400 `Empty values.`, nothing written
    /// - success: 201 with the stored author
    /// - store failure: 500 `Server internal error.`
    pub async fn create(&self, name: &str) -> ServiceOutcome<Author> {
        self.create_with_description(name, None).await
    }

    /// Creates an author with an optional description
    ///
    /// The name is stored trimmed; a blank description is stored as absent.
    #[instrument(skip(self, description))]
    pub async fn create_with_description(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> ServiceOutcome<Author> {
        let name = name.trim();
        if name.is_empty() {
            return ServiceOutcome::validation(EMPTY_VALUES);
        }

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        let new_author = NewAuthor::from_name(name).with_description(description);

        match self.port.create_author(new_author).await {
            Ok(author) => {
                info!(author_id = %author.id, slug = %author.slug, "Author created");
                ServiceOutcome::created(author)
            }
            Err(e) => {
                error!(error = %e, "Failed to create author");
                ServiceOutcome::internal(messages::SERVER_INTERNAL_ERROR)
            }
        }
    }
}
