//! Typed error enum for the service layer.
//!
//! Every failure a handler can surface, so the HTTP layer maps variants to
//! status codes instead of inspecting messages.

use salescript_core::{CoreError, SessionStatus};
use salescript_llm::LlmError;
use salescript_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying validation, identity, storage and LLM failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Generation request without usable input text.
    #[error("Missing input")]
    MissingInput,

    /// No authenticated identity on the request.
    #[error("Unauthorized")]
    Unauthorized,

    /// Identity is known but belongs to no team.
    #[error("No team connected to user")]
    NoTeam,

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Absent, or owned by another team; both look the same to the caller.
    #[error("Session not found for this team")]
    SessionNotFound,

    /// Generation against a session with an outcome, under the `reject` policy.
    #[error("Session is closed ({0})")]
    SessionClosed(SessionStatus),

    #[error("Nothing to update")]
    NothingToUpdate,

    /// Caller provided invalid input (blank name, oversized text, bad enum value).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Completion service failed or timed out.
    #[error("generation failed: {0}")]
    GenerationFailed(#[from] LlmError),

    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidStatus(value) => Self::InvalidStatus(value),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
