//! Pre-built Test Fixtures
//!
//! Well-known philosophers and quotes. Names are fixed so that derived slugs
//! are predictable in assertions.

use core_kernel::AuthorId;
use domain_authors::{AuthorPort, MockAuthorPort, NewAuthor, NewPhrase};
use domain_oppositions::MockOppositionPort;

/// Fixture for author test data
pub struct AuthorFixtures;

impl AuthorFixtures {
    pub fn plato() -> NewAuthor {
        NewAuthor::from_name("Plato")
            .with_description(Some("Athenian philosopher, student of Socrates".to_string()))
    }

    pub fn aristotle() -> NewAuthor {
        NewAuthor::from_name("Aristotle")
            .with_description(Some("Student of Plato, tutor of Alexander".to_string()))
    }

    /// An author without a description
    pub fn heraclitus() -> NewAuthor {
        NewAuthor::from_name("Heraclitus")
    }

    /// A name whose slug needs diacritic folding
    pub fn descartes() -> NewAuthor {
        NewAuthor::from_name("René Descartes")
    }
}

/// Fixture for phrase test data
pub struct PhraseFixtures;

impl PhraseFixtures {
    pub fn unexamined_life(author_id: AuthorId) -> NewPhrase {
        NewPhrase::new(
            author_id,
            "The unexamined life is not worth living.",
            "Apology",
        )
    }

    pub fn habit(author_id: AuthorId) -> NewPhrase {
        NewPhrase::new(author_id, "We are what we repeatedly do.", "Nicomachean Ethics")
    }

    pub fn river(author_id: AuthorId) -> NewPhrase {
        NewPhrase::new(
            author_id,
            "No man ever steps in the same river twice.",
            "Fragments",
        )
    }
}

/// A pair of in-memory ports seeded with Plato and Aristotle
pub struct SeededMockStore {
    pub authors: MockAuthorPort,
    pub oppositions: MockOppositionPort,
    pub plato: AuthorId,
    pub aristotle: AuthorId,
}

impl SeededMockStore {
    pub async fn new() -> Self {
        let authors = MockAuthorPort::new();
        let plato = seed_author(&authors, AuthorFixtures::plato()).await;
        let aristotle = seed_author(&authors, AuthorFixtures::aristotle()).await;
        authors.insert_phrase(PhraseFixtures::unexamined_life(plato)).await;
        authors.insert_phrase(PhraseFixtures::habit(aristotle)).await;

        let oppositions = MockOppositionPort::new(authors.clone());
        Self {
            authors,
            oppositions,
            plato,
            aristotle,
        }
    }
}

async fn seed_author(port: &MockAuthorPort, author: NewAuthor) -> AuthorId {
    let author = author.into_author(AuthorId::new_v7());
    let id = author.id;
    port.insert_author(author).await;
    id
}

/// Builds the author through the port, for tests that want a write counted
pub async fn create_author(port: &dyn AuthorPort, author: NewAuthor) -> AuthorId {
    port.create_author(author)
        .await
        .expect("fixture author should be created")
        .id
}
