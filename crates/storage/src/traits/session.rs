use async_trait::async_trait;
use salescript_core::Session;

use crate::error::StorageError;
use crate::types::SessionUpdate;

/// Session lifecycle operations. Every read and write is scoped to a team.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a new session.
    async fn create_session(&self, session: &Session) -> Result<(), StorageError>;

    /// Get session by ID, only if it belongs to `team_id`.
    async fn get_session(&self, id: &str, team_id: &str) -> Result<Option<Session>, StorageError>;

    /// Apply `update` to the session matching both `id` and `team_id`.
    ///
    /// Returns the updated row, or `None` when no row matched. Concurrent
    /// updates are last-writer-wins.
    async fn update_session(
        &self,
        id: &str,
        team_id: &str,
        update: &SessionUpdate,
    ) -> Result<Option<Session>, StorageError>;
}
