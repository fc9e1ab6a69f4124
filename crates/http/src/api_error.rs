//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and status code.
//! Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use salescript_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` variant logs the real error server-side and returns
/// a static message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 401 Unauthorized: no caller identity.
    Unauthorized(String),
    /// 403 Forbidden: caller has no team.
    Forbidden(String),
    /// 404 Not Found: absent or owned by another team.
    NotFound(String),
    /// 409 Conflict: session already has an outcome.
    Conflict(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MissingInput
            | ServiceError::InvalidStatus(_)
            | ServiceError::NothingToUpdate
            | ServiceError::InvalidInput(_) => Self::BadRequest(err.to_string()),
            ServiceError::Unauthorized => Self::Unauthorized(err.to_string()),
            ServiceError::NoTeam => Self::Forbidden(err.to_string()),
            ServiceError::SessionNotFound => Self::NotFound(err.to_string()),
            ServiceError::SessionClosed(_) => Self::Conflict(err.to_string()),
            ServiceError::GenerationFailed(_) | ServiceError::Storage(_) => {
                Self::Internal(err.into())
            },
        }
    }
}
