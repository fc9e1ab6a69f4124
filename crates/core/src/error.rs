use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while validating domain values in salescript-core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid sales motion: {0}")]
    InvalidSalesMotion(String),

    #[error("Invalid member role: {0}")]
    InvalidRole(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, CoreError>;
