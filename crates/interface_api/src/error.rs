//! API responses and transport-level errors
//!
//! Service outcomes reach the wire as [`EnvelopeResponse`], whose HTTP status
//! is the envelope `code`. Requests that never reach a service (unreadable
//! bodies, path ids that are not UUIDs) are answered with [`ApiError`] in the
//! same envelope shape.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::envelope::messages;
use core_kernel::{Envelope, ServiceOutcome};

/// A service envelope rendered as an HTTP response
#[derive(Debug)]
pub struct EnvelopeResponse<T>(pub Envelope<T>);

impl<T> From<ServiceOutcome<T>> for EnvelopeResponse<T> {
    fn from(outcome: ServiceOutcome<T>) -> Self {
        Self(outcome.into_envelope())
    }
}

impl<T: Serialize> IntoResponse for EnvelopeResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        // 204 carries no body
        if status == StatusCode::NO_CONTENT {
            return status.into_response();
        }
        (status, Json(self.0)).into_response()
    }
}

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// The path does not identify any record
    #[error("Not found")]
    NotFound,

    /// The request body or query string could not be read
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = match self {
            ApiError::NotFound => Envelope::<()> {
                code: StatusCode::NOT_FOUND.as_u16(),
                data: None,
                message: messages::NOT_FOUND.to_string(),
            },
            ApiError::BadRequest(message) => Envelope::<()> {
                code: StatusCode::BAD_REQUEST.as_u16(),
                data: None,
                message,
            },
        };
        EnvelopeResponse(envelope).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
