use salescript_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Missing row, or a write that points at a team or session that does not exist.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("duplicate: {0}")]
    Duplicate(String),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A stored status, role or sales motion no longer parses.
    #[error("invalid row: {0}")]
    InvalidRow(#[from] CoreError),

    #[error("migration error: {0}")]
    Migration(String),
}

/// Unique violations (23505) become `Duplicate`, foreign-key violations
/// (23503) become `NotFound`.
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate(db_err.message().to_owned())
            },
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23503") => {
                Self::NotFound {
                    entity: "reference",
                    id: db_err.constraint().unwrap_or("unknown").to_owned(),
                }
            },
            _ => Self::Database(err),
        }
    }
}
