//! Opposition handlers
//!
//! Path ids that are not UUIDs cannot identify an opposition and are answered
//! with a 404 envelope without calling the service.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use core_kernel::OppositionId;
use domain_oppositions::{Opposition, OppositionDetail, OppositionPhrases};

use crate::dto::oppositions::{CreateOppositionBody, FindOppositionsParams, UpdateOppositionBody};
use crate::error::{ApiError, EnvelopeResponse};
use crate::AppState;

fn parse_id(raw: &str) -> Result<OppositionId, ApiError> {
    OppositionId::parse_lenient(raw).ok_or(ApiError::NotFound)
}

/// Creates an opposition between two authors
pub async fn create_opposition(
    State(state): State<AppState>,
    body: Result<Json<CreateOppositionBody>, JsonRejection>,
) -> Result<EnvelopeResponse<Opposition>, ApiError> {
    let Json(body) = body?;
    Ok(state.oppositions.create(body.into()).await.into())
}

/// Lists oppositions, optionally filtered by `?query=`
pub async fn list_oppositions(
    State(state): State<AppState>,
    params: Result<Query<FindOppositionsParams>, QueryRejection>,
) -> Result<EnvelopeResponse<Vec<OppositionDetail>>, ApiError> {
    let Query(params) = params?;
    Ok(state.oppositions.find_many(params.query.as_deref()).await.into())
}

/// Gets an opposition by ID
pub async fn get_opposition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<EnvelopeResponse<OppositionDetail>, ApiError> {
    let id = parse_id(&id)?;
    Ok(state.oppositions.find_by_id(id).await.into())
}

/// Updates one or both authors of an opposition
pub async fn update_opposition(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateOppositionBody>, JsonRejection>,
) -> Result<EnvelopeResponse<Opposition>, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = body?;
    Ok(state.oppositions.update_one(id, body.into()).await.into())
}

/// Deletes an opposition
pub async fn delete_opposition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<EnvelopeResponse<Opposition>, ApiError> {
    let id = parse_id(&id)?;
    Ok(state.oppositions.delete_one(id).await.into())
}

/// Gets both authors of an opposition with their phrases
pub async fn get_opposition_phrases(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<EnvelopeResponse<OppositionPhrases>, ApiError> {
    let id = parse_id(&id)?;
    Ok(state.oppositions.find_phrases_by_opposition(id).await.into())
}
