use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::repository::repository_error::RepositoryError;

/// Errors crossing the service boundary. Messages are wire-ready and in the
/// customer-facing language.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => ServiceError::NotFound(msg),
            RepositoryError::ValidationError(msg) => ServiceError::InvalidInput(msg),
            RepositoryError::DatabaseError(msg)
            | RepositoryError::ConnectionError(msg)
            | RepositoryError::SerializationError(msg) => ServiceError::InternalError(msg),
            RepositoryError::Generic(e) => ServiceError::InternalError(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerErrorKind {
    NotFound,
    Validation,
    BadRequest,
    Internal,
}

/// HTTP-boundary error. Serializes as the failure envelope the frontends
/// consume: `{"success": false, "message": ..., "error": ...}`.
#[derive(Debug)]
pub struct HandlerError {
    pub kind: HandlerErrorKind,
    pub message: String,
    pub detail: Option<String>,
}

impl HandlerError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        HandlerError {
            kind: HandlerErrorKind::BadRequest,
            message: message.into(),
            detail: None,
        }
    }

    pub fn validation(message: impl Into<String>, detail: Option<String>) -> Self {
        HandlerError {
            kind: HandlerErrorKind::Validation,
            message: message.into(),
            detail,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HandlerError {
            kind: HandlerErrorKind::NotFound,
            message: message.into(),
            detail: None,
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        HandlerError {
            kind: HandlerErrorKind::Internal,
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    /// Map a service failure onto the endpoint's own internal-error message,
    /// preserving bad-input and not-found messages from the service.
    pub fn from_service(err: ServiceError, internal_message: &str) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => HandlerError::bad_request(msg),
            ServiceError::NotFound(msg) => HandlerError::not_found(msg),
            ServiceError::InternalError(detail) => {
                HandlerError::internal(internal_message, detail)
            }
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for HandlerError {}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.kind {
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::Validation | HandlerErrorKind::BadRequest => {
                StatusCode::BAD_REQUEST
            }
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = axum::Json(ErrorBody {
            success: false,
            message: self.message,
            error: self.detail,
        });
        (status, body).into_response()
    }
}
