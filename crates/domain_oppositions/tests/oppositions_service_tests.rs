//! Tests for the oppositions service against the in-memory ports

use std::sync::Arc;

use async_trait::async_trait;

use core_kernel::{
    AuthorId, DomainPort, FailureKind, HealthCheckResult, HealthCheckable, OppositionId, PortError,
};
use domain_authors::{Author, AuthorPort, MockAuthorPort, NewAuthor, NewPhrase};
use domain_oppositions::{
    CreateOppositionRequest, MockOppositionPort, Opposition, OppositionsService,
    UpdateOppositionRequest,
};

struct Fixture {
    service: OppositionsService,
    authors: MockAuthorPort,
    oppositions: MockOppositionPort,
    plato: Author,
    aristotle: Author,
    kant: Author,
}

async fn fixture() -> Fixture {
    let authors = MockAuthorPort::new();
    let plato = authors.create_author(NewAuthor::from_name("Plato")).await.unwrap();
    let aristotle = authors.create_author(NewAuthor::from_name("Aristotle")).await.unwrap();
    let kant = authors
        .create_author(
            NewAuthor::from_name("Immanuel Kant")
                .with_description(Some("Critique of Pure Reason".to_string())),
        )
        .await
        .unwrap();
    let oppositions = MockOppositionPort::new(authors.clone());
    let service = OppositionsService::new(Arc::new(oppositions.clone()), Arc::new(authors.clone()));
    Fixture { service, authors, oppositions, plato, aristotle, kant }
}

async fn create(fx: &Fixture, first: &Author, second: &Author) -> Opposition {
    fx.service
        .create(CreateOppositionRequest::new(first.id.as_uuid().to_string(), second.id.as_uuid().to_string()))
        .await
        .into_data()
        .expect("opposition created")
}

/// Author port that returns lookups in reverse order
struct ReversingAuthorPort(MockAuthorPort);

impl DomainPort for ReversingAuthorPort {}

#[async_trait]
impl HealthCheckable for ReversingAuthorPort {
    async fn health_check(&self) -> HealthCheckResult {
        self.0.health_check().await
    }
}

#[async_trait]
impl AuthorPort for ReversingAuthorPort {
    async fn create_author(&self, author: NewAuthor) -> Result<Author, PortError> {
        self.0.create_author(author).await
    }

    async fn find_author(&self, id: AuthorId) -> Result<Option<Author>, PortError> {
        self.0.find_author(id).await
    }

    async fn find_authors_by_ids(&self, ids: &[AuthorId]) -> Result<Vec<Author>, PortError> {
        let mut authors = self.0.find_authors_by_ids(ids).await?;
        authors.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(authors)
    }
}

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_derives_slug_in_role_order() {
        let fx = fixture().await;

        let outcome = fx
            .service
            .create(CreateOppositionRequest::new(fx.plato.id.to_string(), fx.aristotle.id.to_string()))
            .await;

        assert_eq!(outcome.code(), 201);
        assert_eq!(outcome.message(), "Created with success.");
        let opposition = outcome.data().unwrap();
        assert_eq!(opposition.slug, "plato-aristotle");
        assert_eq!(opposition.first_author_id, fx.plato.id);
        assert_eq!(opposition.second_author_id, fx.aristotle.id);
        assert_eq!(fx.oppositions.opposition(opposition.id).await.as_ref(), Some(opposition));
    }

    #[tokio::test]
    async fn test_create_slug_ignores_lookup_order() {
        let fx = fixture().await;
        let service = OppositionsService::new(
            Arc::new(fx.oppositions.clone()),
            Arc::new(ReversingAuthorPort(fx.authors.clone())),
        );

        // Reversed by name, the lookup returns Plato before Aristotle
        let outcome = service
            .create(CreateOppositionRequest::new(fx.aristotle.id.to_string(), fx.plato.id.to_string()))
            .await;

        assert_eq!(outcome.data().unwrap().slug, "aristotle-plato");
    }

    #[tokio::test]
    async fn test_missing_ids_fail_validation_without_store_access() {
        let fx = fixture().await;

        let cases = [
            (CreateOppositionRequest::default(), "firstAuthorId is required."),
            (
                CreateOppositionRequest { first_author_id: Some("".into()), second_author_id: Some("x".into()) },
                "firstAuthorId is required.",
            ),
            (
                CreateOppositionRequest { first_author_id: Some(fx.plato.id.to_string()), second_author_id: None },
                "secondAuthorId is required.",
            ),
            (
                CreateOppositionRequest { first_author_id: Some(fx.plato.id.to_string()), second_author_id: Some("  ".into()) },
                "secondAuthorId is required.",
            ),
        ];

        fx.authors.set_unavailable(true);
        for (request, expected) in cases {
            let envelope = fx.service.create(request).await.into_envelope();
            assert_eq!(envelope.code, 400);
            assert!(envelope.data.is_none());
            assert_eq!(envelope.message, expected);
        }
        assert_eq!(fx.oppositions.write_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_author_is_404() {
        let fx = fixture().await;

        let outcome = fx
            .service
            .create(CreateOppositionRequest::new(fx.plato.id.to_string(), AuthorId::new().to_string()))
            .await;

        assert_eq!(outcome.code(), 404);
        assert_eq!(outcome.message(), "One or both authors not found.");
        assert_eq!(fx.oppositions.write_count(), 0);
    }

    #[tokio::test]
    async fn test_same_author_twice_is_404() {
        let fx = fixture().await;

        let outcome = fx
            .service
            .create(CreateOppositionRequest::new(fx.plato.id.to_string(), fx.plato.id.to_string()))
            .await;

        assert_eq!(outcome.code(), 404);
        assert_eq!(fx.oppositions.opposition_count().await, 0);
    }

    #[tokio::test]
    async fn test_unparseable_id_is_404() {
        let fx = fixture().await;

        let outcome = fx
            .service
            .create(CreateOppositionRequest::new("plato", fx.aristotle.id.to_string()))
            .await;

        assert_eq!(outcome.failure_kind(), Some(FailureKind::NotFound));
    }

    #[tokio::test]
    async fn test_store_failure_is_500() {
        let fx = fixture().await;
        fx.oppositions.set_unavailable(true);

        let envelope = fx
            .service
            .create(CreateOppositionRequest::new(fx.plato.id.to_string(), fx.aristotle.id.to_string()))
            .await
            .into_envelope();

        assert_eq!(envelope.code, 500);
        assert_eq!(envelope.message, "Server internal error.");
        assert!(envelope.data.is_none());
    }
}

mod find_tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_id_expands_both_authors() {
        let fx = fixture().await;
        let opposition = create(&fx, &fx.kant, &fx.plato).await;

        let outcome = fx.service.find_by_id(opposition.id).await;

        assert_eq!(outcome.code(), 200);
        assert_eq!(outcome.message(), "Finded.");
        let detail = outcome.data().unwrap();
        assert_eq!(detail.id, opposition.id);
        assert_eq!(detail.slug, "immanuel-kant-plato");
        assert_eq!(detail.first_author.name, "Immanuel Kant");
        assert_eq!(detail.first_author.description.as_deref(), Some("Critique of Pure Reason"));
        assert_eq!(detail.second_author.id, fx.plato.id);
    }

    #[tokio::test]
    async fn test_find_by_id_unknown_is_404() {
        let fx = fixture().await;

        let envelope = fx.service.find_by_id(OppositionId::new()).await.into_envelope();

        assert_eq!(envelope.code, 404);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message, "Not found.");
    }

    #[tokio::test]
    async fn test_find_by_id_store_failure_is_500() {
        let fx = fixture().await;
        fx.oppositions.set_unavailable(true);

        let outcome = fx.service.find_by_id(OppositionId::new()).await;

        assert_eq!(outcome.code(), 500);
        assert_eq!(outcome.message(), "Internal server error.");
    }

    #[tokio::test]
    async fn test_find_many_without_query_returns_all() {
        let fx = fixture().await;
        create(&fx, &fx.plato, &fx.aristotle).await;
        create(&fx, &fx.kant, &fx.aristotle).await;

        let outcome = fx.service.find_many(None).await;

        assert_eq!(outcome.code(), 200);
        assert_eq!(outcome.message(), "Finded!");
        let slugs: Vec<_> = outcome.data().unwrap().iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["immanuel-kant-aristotle", "plato-aristotle"]);
    }

    #[tokio::test]
    async fn test_find_many_filters_by_slug_substring() {
        let fx = fixture().await;
        create(&fx, &fx.plato, &fx.aristotle).await;
        create(&fx, &fx.kant, &fx.plato).await;
        create(&fx, &fx.kant, &fx.aristotle).await;

        let outcome = fx.service.find_many(Some("plato")).await;

        let slugs: Vec<_> = outcome.data().unwrap().iter().map(|d| d.slug.clone()).collect();
        assert_eq!(slugs, vec!["immanuel-kant-plato".to_string(), "plato-aristotle".to_string()]);
    }

    #[tokio::test]
    async fn test_find_many_is_case_sensitive_and_empty_is_success() {
        let fx = fixture().await;
        create(&fx, &fx.plato, &fx.aristotle).await;

        let envelope = fx.service.find_many(Some("PLATO")).await.into_envelope();

        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.data, Some(vec![]));
    }

    #[tokio::test]
    async fn test_find_many_empty_query_means_all() {
        let fx = fixture().await;
        create(&fx, &fx.plato, &fx.aristotle).await;

        let outcome = fx.service.find_many(Some("")).await;

        assert_eq!(outcome.data().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_reads_are_identical() {
        let fx = fixture().await;
        let opposition = create(&fx, &fx.plato, &fx.aristotle).await;
        create(&fx, &fx.kant, &fx.plato).await;

        let first_list = serde_json::to_vec(&fx.service.find_many(None).await.into_envelope()).unwrap();
        let second_list = serde_json::to_vec(&fx.service.find_many(None).await.into_envelope()).unwrap();
        assert_eq!(first_list, second_list);

        let first_one = serde_json::to_vec(&fx.service.find_by_id(opposition.id).await.into_envelope()).unwrap();
        let second_one = serde_json::to_vec(&fx.service.find_by_id(opposition.id).await.into_envelope()).unwrap();
        assert_eq!(first_one, second_one);
    }
}

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_update_first_author_keeps_second() {
        let fx = fixture().await;
        let opposition = create(&fx, &fx.plato, &fx.aristotle).await;

        let outcome = fx
            .service
            .update_one(opposition.id, UpdateOppositionRequest::first(fx.kant.id.to_string()))
            .await;

        assert_eq!(outcome.code(), 200);
        assert_eq!(outcome.message(), "Updated.");
        let updated = outcome.data().unwrap();
        assert_eq!(updated.first_author_id, fx.kant.id);
        assert_eq!(updated.second_author_id, fx.aristotle.id);
        assert_eq!(updated.slug, "immanuel-kant-aristotle");
    }

    #[tokio::test]
    async fn test_update_second_author_keeps_first() {
        let fx = fixture().await;
        let opposition = create(&fx, &fx.plato, &fx.aristotle).await;

        let updated = fx
            .service
            .update_one(opposition.id, UpdateOppositionRequest::second(fx.kant.id.to_string()))
            .await
            .into_data()
            .unwrap();

        assert_eq!(updated.first_author_id, fx.plato.id);
        assert_eq!(updated.second_author_id, fx.kant.id);
        assert_eq!(updated.slug, "plato-immanuel-kant");
    }

    #[tokio::test]
    async fn test_update_both_authors() {
        let fx = fixture().await;
        let opposition = create(&fx, &fx.plato, &fx.aristotle).await;

        let updated = fx
            .service
            .update_one(
                opposition.id,
                UpdateOppositionRequest {
                    first_author_id: Some(fx.aristotle.id.to_string()),
                    second_author_id: Some(fx.kant.id.to_string()),
                },
            )
            .await
            .into_data()
            .unwrap();

        assert_eq!(updated.slug, "aristotle-immanuel-kant");
    }

    #[tokio::test]
    async fn test_update_without_ids_recomputes_slug_from_current_names() {
        let fx = fixture().await;
        let mut stale = create(&fx, &fx.plato, &fx.aristotle).await;
        stale.slug = "stale".to_string();
        fx.oppositions.insert_opposition(stale.clone()).await;

        let updated = fx
            .service
            .update_one(stale.id, UpdateOppositionRequest::default())
            .await
            .into_data()
            .unwrap();

        assert_eq!(updated.slug, "plato-aristotle");
        assert_eq!(updated.first_author_id, fx.plato.id);
        assert_eq!(updated.second_author_id, fx.aristotle.id);
    }

    #[tokio::test]
    async fn test_update_unknown_opposition_is_404() {
        let fx = fixture().await;

        let outcome = fx
            .service
            .update_one(OppositionId::new(), UpdateOppositionRequest::first(fx.kant.id.to_string()))
            .await;

        assert_eq!(outcome.code(), 404);
        assert_eq!(outcome.message(), "Not found.");
    }

    #[tokio::test]
    async fn test_update_unknown_first_author_is_404() {
        let fx = fixture().await;
        let opposition = create(&fx, &fx.plato, &fx.aristotle).await;
        let writes_before = fx.oppositions.write_count();

        let outcome = fx
            .service
            .update_one(opposition.id, UpdateOppositionRequest::first(AuthorId::new().to_string()))
            .await;

        assert_eq!(outcome.code(), 404);
        assert_eq!(outcome.message(), "First author not found.");
        assert_eq!(fx.oppositions.write_count(), writes_before);
    }

    #[tokio::test]
    async fn test_update_unknown_second_author_is_404() {
        let fx = fixture().await;
        let opposition = create(&fx, &fx.plato, &fx.aristotle).await;

        let outcome = fx
            .service
            .update_one(opposition.id, UpdateOppositionRequest::second("not-an-id"))
            .await;

        assert_eq!(outcome.code(), 404);
        assert_eq!(outcome.message(), "Second author not found.");
        assert_eq!(fx.oppositions.opposition(opposition.id).await, Some(opposition));
    }

    #[tokio::test]
    async fn test_update_store_failure_is_500() {
        let fx = fixture().await;
        let opposition = create(&fx, &fx.plato, &fx.aristotle).await;
        fx.authors.set_unavailable(true);

        let outcome = fx
            .service
            .update_one(opposition.id, UpdateOppositionRequest::first(fx.kant.id.to_string()))
            .await;

        assert_eq!(outcome.code(), 500);
        assert_eq!(outcome.message(), "Internal server error.");
    }
}

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_returns_pre_deletion_record() {
        let fx = fixture().await;
        let opposition = create(&fx, &fx.plato, &fx.aristotle).await;

        let outcome = fx.service.delete_one(opposition.id).await;

        assert_eq!(outcome.code(), 204);
        assert_eq!(outcome.message(), "Deleted.");
        assert_eq!(outcome.data(), Some(&opposition));
        assert_eq!(fx.oppositions.opposition_count().await, 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_404_without_deleting() {
        let fx = fixture().await;
        create(&fx, &fx.plato, &fx.aristotle).await;
        let writes_before = fx.oppositions.write_count();

        let envelope = fx.service.delete_one(OppositionId::new()).await.into_envelope();

        assert_eq!(envelope.code, 404);
        assert!(envelope.data.is_none());
        assert_eq!(fx.oppositions.write_count(), writes_before);
        assert_eq!(fx.oppositions.opposition_count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_store_failure_is_500() {
        let fx = fixture().await;
        fx.oppositions.set_unavailable(true);

        let outcome = fx.service.delete_one(OppositionId::new()).await;

        assert_eq!(outcome.code(), 500);
    }
}

mod phrases_tests {
    use super::*;

    #[tokio::test]
    async fn test_phrases_are_nested_under_each_author() {
        let fx = fixture().await;
        let opposition = create(&fx, &fx.plato, &fx.aristotle).await;
        let cave = fx
            .authors
            .insert_phrase(NewPhrase::new(fx.plato.id, "The measure of a man is what he does with power.", "Republic"))
            .await;
        let ideas = fx
            .authors
            .insert_phrase(NewPhrase::new(fx.plato.id, "Ideas are the only reality.", "Phaedo"))
            .await;
        let habit = fx
            .authors
            .insert_phrase(NewPhrase::new(fx.aristotle.id, "We are what we repeatedly do.", "Nicomachean Ethics"))
            .await;
        fx.authors
            .insert_phrase(NewPhrase::new(fx.kant.id, "Sapere aude.", "What is Enlightenment?"))
            .await;

        let outcome = fx.service.find_phrases_by_opposition(opposition.id).await;

        assert_eq!(outcome.code(), 200);
        assert_eq!(outcome.message(), "Finded.");
        let phrases = outcome.data().unwrap();
        assert_eq!(phrases.slug, "plato-aristotle");
        assert_eq!(phrases.first_author.id, fx.plato.id);
        assert_eq!(phrases.first_author.phrases, vec![cave, ideas]);
        assert_eq!(phrases.second_author.name, "Aristotle");
        assert_eq!(phrases.second_author.phrases, vec![habit]);
    }

    #[tokio::test]
    async fn test_authors_without_phrases_have_empty_lists() {
        let fx = fixture().await;
        let opposition = create(&fx, &fx.plato, &fx.aristotle).await;

        let phrases = fx
            .service
            .find_phrases_by_opposition(opposition.id)
            .await
            .into_data()
            .unwrap();

        assert!(phrases.first_author.phrases.is_empty());
        assert!(phrases.second_author.phrases.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_opposition_is_404() {
        let fx = fixture().await;

        let outcome = fx.service.find_phrases_by_opposition(OppositionId::new()).await;

        assert_eq!(outcome.code(), 404);
        assert_eq!(outcome.message(), "Not found.");
    }
}
