//! Generation orchestrator.
//!
//! validate -> resolve caller -> check session -> compose prompt -> one
//! completion call -> parse sections -> persist. Persistence is best effort:
//! once the model has answered, the caller gets the text even if storing it
//! fails.

use std::sync::Arc;

use chrono::Utc;
use salescript_core::{MAX_INPUT_LEN, Playbook, Script, ScriptSections, Session};
use salescript_llm::{LlmClient, compose_system_prompt};
use salescript_storage::SalesStore;

use crate::caller::{Caller, resolve_caller};
use crate::config::{ClosedSessionPolicy, GenerationConfig};
use crate::error::ServiceError;

/// Result handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    /// `None` when the script could not be stored.
    pub script_id: Option<String>,
    pub session_id: Option<String>,
    pub raw_output: String,
    pub sections: ScriptSections,
}

pub struct GenerationService {
    store: Arc<dyn SalesStore>,
    llm: Arc<LlmClient>,
    config: GenerationConfig,
}

impl GenerationService {
    #[must_use]
    pub fn new(store: Arc<dyn SalesStore>, llm: Arc<LlmClient>, config: GenerationConfig) -> Self {
        Self { store, llm, config }
    }

    /// Generate a script for `input`, optionally inside an existing session.
    ///
    /// Input is checked before identity, so an anonymous empty request is a
    /// `MissingInput`, not `Unauthorized`.
    pub async fn generate(
        &self,
        user_id: Option<&str>,
        input: &str,
        session_id: Option<&str>,
    ) -> Result<GeneratedScript, ServiceError> {
        if input.trim().is_empty() {
            return Err(ServiceError::MissingInput);
        }
        if input.len() > MAX_INPUT_LEN {
            return Err(ServiceError::InvalidInput(format!(
                "input exceeds {MAX_INPUT_LEN} bytes"
            )));
        }

        let caller = resolve_caller(self.store.as_ref(), user_id).await?;

        let session_id = session_id.map(str::trim).filter(|id| !id.is_empty());
        let session = match session_id {
            Some(id) => Some(self.load_open_session(&caller, id).await?),
            None => None,
        };

        let playbook = self.load_playbook(&caller).await;
        let system_prompt = compose_system_prompt(&playbook, &self.config.language);
        let raw_output = self.llm.generate_script(system_prompt, input).await.map_err(|e| {
            tracing::error!(
                team_id = %caller.team_id,
                transient = e.is_transient(),
                error = %e,
                "completion request failed"
            );
            ServiceError::GenerationFailed(e)
        })?;

        let session_id = match session {
            Some(session) => Some(session.id),
            None => self.create_lazy_session(&caller).await,
        };

        let script = Script::from_output(
            uuid::Uuid::new_v4().to_string(),
            Utc::now(),
            session_id,
            caller.team_id,
            caller.user_id,
            input.to_owned(),
            raw_output,
        );
        if script.sections.is_empty() {
            tracing::warn!(script_id = %script.id, "model output contained no section markers");
        }

        let stored = match self.store.save_script(&script).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(script_id = %script.id, error = %e, "failed to persist script");
                false
            },
        };

        let Script { id, session_id, raw_output, sections, .. } = script;
        tracing::info!(
            script_id = %id,
            stored,
            output_len = raw_output.len(),
            "script generated"
        );
        Ok(GeneratedScript { script_id: stored.then_some(id), session_id, raw_output, sections })
    }

    async fn load_open_session(&self, caller: &Caller, id: &str) -> Result<Session, ServiceError> {
        let session = self
            .store
            .get_session(id, &caller.team_id)
            .await?
            .ok_or(ServiceError::SessionNotFound)?;
        if session.is_closed() && self.config.closed_session_policy == ClosedSessionPolicy::Reject {
            return Err(ServiceError::SessionClosed(session.status));
        }
        Ok(session)
    }

    /// A missing or unreadable playbook falls back to defaults.
    async fn load_playbook(&self, caller: &Caller) -> Playbook {
        match self.store.get_playbook(&caller.team_id).await {
            Ok(playbook) => playbook.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(
                    team_id = %caller.team_id,
                    error = %e,
                    "playbook unavailable, using defaults"
                );
                Playbook::default()
            },
        }
    }

    /// Open a session for a generation that arrived without one.
    /// On failure the script is stored without a session.
    async fn create_lazy_session(&self, caller: &Caller) -> Option<String> {
        let session = Session::new(
            uuid::Uuid::new_v4().to_string(),
            caller.team_id.clone(),
            caller.user_id.clone(),
            None,
            Utc::now(),
        );
        match self.store.create_session(&session).await {
            Ok(()) => {
                tracing::debug!(session_id = %session.id, "session created for generation");
                Some(session.id)
            },
            Err(e) => {
                tracing::error!(
                    team_id = %caller.team_id,
                    error = %e,
                    "failed to create session for script"
                );
                None
            },
        }
    }
}
