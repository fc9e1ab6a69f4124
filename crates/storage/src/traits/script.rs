use async_trait::async_trait;
use salescript_core::{Script, ScriptHistoryEntry};

use crate::error::StorageError;
use crate::types::HistoryQuery;

/// Generated script persistence.
#[async_trait]
pub trait ScriptStore: Send + Sync {
    /// Insert a script. Raw output and parsed sections are written together.
    async fn save_script(&self, script: &Script) -> Result<(), StorageError>;

    /// Scripts created by `query.created_by`, newest first, joined with their session.
    async fn list_history(
        &self,
        query: &HistoryQuery,
    ) -> Result<Vec<ScriptHistoryEntry>, StorageError>;

    /// Most recent script created by `created_by`.
    async fn latest_script(&self, created_by: &str) -> Result<Option<Script>, StorageError>;
}
