//! Author handlers

use axum::{extract::{rejection::JsonRejection, State}, Json};

use domain_authors::Author;

use crate::dto::authors::CreateAuthorBody;
use crate::error::{ApiError, EnvelopeResponse};
use crate::AppState;

/// Creates an author
pub async fn create_author(
    State(state): State<AppState>,
    body: Result<Json<CreateAuthorBody>, JsonRejection>,
) -> Result<EnvelopeResponse<Author>, ApiError> {
    let Json(body) = body?;
    let outcome = state
        .authors
        .create_with_description(body.name.as_deref().unwrap_or_default(), body.description.as_deref())
        .await;
    Ok(outcome.into())
}
