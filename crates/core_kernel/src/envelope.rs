//! The uniform service result
//!
//! Every service operation returns a [`ServiceOutcome`]: either a success
//! carrying its payload, or a failure carrying its kind and a human-readable
//! message. Nothing is thrown across the service boundary. Callers that need
//! the wire shape convert the outcome into an [`Envelope`]:
//!
//! ```rust
//! use core_kernel::{Envelope, ServiceOutcome};
//!
//! let outcome: ServiceOutcome<u32> = ServiceOutcome::not_found("Not found.");
//! let envelope = Envelope::from(outcome);
//! assert_eq!(envelope.code, 404);
//! assert!(envelope.data.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Message strings shared by several services
pub mod messages {
    pub const CREATED: &str = "Created with success.";
    pub const FOUND: &str = "Finded.";
    pub const FOUND_MANY: &str = "Finded!";
    pub const UPDATED: &str = "Updated.";
    pub const DELETED: &str = "Deleted.";
    pub const NOT_FOUND: &str = "Not found.";
    /// Used by create operations
    pub const SERVER_INTERNAL_ERROR: &str = "Server internal error.";
    /// Used by read, update and delete operations
    pub const INTERNAL_SERVER_ERROR: &str = "Internal server error.";
}

/// Successful outcome kinds and their status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessStatus {
    /// 200
    Ok,
    /// 201
    Created,
    /// 204
    Deleted,
}

impl SuccessStatus {
    pub fn code(self) -> u16 {
        match self {
            SuccessStatus::Ok => 200,
            SuccessStatus::Created => 201,
            SuccessStatus::Deleted => 204,
        }
    }
}

/// Failure kinds and their status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 400, required input missing; detected before any store access
    Validation,
    /// 404, a referenced author or opposition does not exist
    NotFound,
    /// 500, any store failure
    Internal,
}

impl FailureKind {
    pub fn code(self) -> u16 {
        match self {
            FailureKind::Validation => 400,
            FailureKind::NotFound => 404,
            FailureKind::Internal => 500,
        }
    }
}

/// Tagged result of a service operation
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum ServiceOutcome<T> {
    Success {
        status: SuccessStatus,
        data: T,
        message: &'static str,
    },
    Failure {
        kind: FailureKind,
        message: String,
    },
}

impl<T> ServiceOutcome<T> {
    pub fn ok(data: T, message: &'static str) -> Self {
        ServiceOutcome::Success { status: SuccessStatus::Ok, data, message }
    }

    pub fn created(data: T) -> Self {
        ServiceOutcome::Success {
            status: SuccessStatus::Created,
            data,
            message: messages::CREATED,
        }
    }

    pub fn deleted(data: T) -> Self {
        ServiceOutcome::Success {
            status: SuccessStatus::Deleted,
            data,
            message: messages::DELETED,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ServiceOutcome::Failure { kind: FailureKind::Validation, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceOutcome::Failure { kind: FailureKind::NotFound, message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ServiceOutcome::Failure { kind: FailureKind::Internal, message: message.into() }
    }

    /// HTTP-style status code
    pub fn code(&self) -> u16 {
        match self {
            ServiceOutcome::Success { status, .. } => status.code(),
            ServiceOutcome::Failure { kind, .. } => kind.code(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ServiceOutcome::Success { message, .. } => message,
            ServiceOutcome::Failure { message, .. } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ServiceOutcome::Success { .. })
    }

    /// Returns the failure kind, if any
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ServiceOutcome::Success { .. } => None,
            ServiceOutcome::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ServiceOutcome::Success { data, .. } => Some(data),
            ServiceOutcome::Failure { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            ServiceOutcome::Success { data, .. } => Some(data),
            ServiceOutcome::Failure { .. } => None,
        }
    }

    /// Transforms the success payload, leaving failures untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ServiceOutcome<U> {
        match self {
            ServiceOutcome::Success { status, data, message } => {
                ServiceOutcome::Success { status, data: f(data), message }
            }
            ServiceOutcome::Failure { kind, message } => ServiceOutcome::Failure { kind, message },
        }
    }

    pub fn into_envelope(self) -> Envelope<T> {
        Envelope::from(self)
    }
}

/// Wire shape of a service result: `{code, data, message}`
///
/// `data` is `null` for every failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub data: Option<T>,
    pub message: String,
}

impl<T> From<ServiceOutcome<T>> for Envelope<T> {
    fn from(outcome: ServiceOutcome<T>) -> Self {
        let code = outcome.code();
        match outcome {
            ServiceOutcome::Success { data, message, .. } => Envelope {
                code,
                data: Some(data),
                message: message.to_string(),
            },
            ServiceOutcome::Failure { message, .. } => Envelope {
                code,
                data: None,
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_codes() {
        assert_eq!(ServiceOutcome::ok(1, messages::FOUND).code(), 200);
        assert_eq!(ServiceOutcome::created(1).code(), 201);
        assert_eq!(ServiceOutcome::deleted(1).code(), 204);
    }

    #[test]
    fn test_failure_codes() {
        assert_eq!(ServiceOutcome::<()>::validation("x is required.").code(), 400);
        assert_eq!(ServiceOutcome::<()>::not_found(messages::NOT_FOUND).code(), 404);
        assert_eq!(ServiceOutcome::<()>::internal(messages::INTERNAL_SERVER_ERROR).code(), 500);
    }

    #[test]
    fn test_envelope_serializes_null_data_on_failure() {
        let envelope = ServiceOutcome::<String>::not_found(messages::NOT_FOUND).into_envelope();
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": 404, "data": null, "message": "Not found."})
        );
    }

    #[test]
    fn test_map_preserves_status() {
        let outcome = ServiceOutcome::created(2).map(|n| n * 10);
        assert_eq!(outcome.code(), 201);
        assert_eq!(outcome.data(), Some(&20));
        assert_eq!(outcome.message(), messages::CREATED);
    }
}
