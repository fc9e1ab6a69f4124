use std::sync::Arc;

use salescript_core::{DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT, Script, ScriptHistoryEntry};
use salescript_storage::{HistoryQuery, SalesStore};

use crate::caller::require_user;
use crate::error::ServiceError;

/// Read side of generated scripts. Scoped to the requesting user, not the team.
pub struct HistoryService {
    store: Arc<dyn SalesStore>,
}

impl HistoryService {
    #[must_use]
    pub fn new(store: Arc<dyn SalesStore>) -> Self {
        Self { store }
    }

    /// Newest first, joined with session display fields.
    pub async fn list_history(
        &self,
        user_id: Option<&str>,
        limit: Option<usize>,
        session_id: Option<&str>,
    ) -> Result<Vec<ScriptHistoryEntry>, ServiceError> {
        let user_id = require_user(user_id)?;
        let query = HistoryQuery {
            created_by: user_id.to_owned(),
            session_id: session_id.map(str::trim).filter(|id| !id.is_empty()).map(str::to_owned),
            limit: limit.unwrap_or(DEFAULT_HISTORY_LIMIT).min(MAX_HISTORY_LIMIT),
        };
        Ok(self.store.list_history(&query).await?)
    }

    pub async fn latest_script(&self, user_id: Option<&str>) -> Result<Option<Script>, ServiceError> {
        let user_id = require_user(user_id)?;
        Ok(self.store.latest_script(user_id).await?)
    }
}
