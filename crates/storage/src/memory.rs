//! In-process storage backend.
//!
//! Same contract as [`crate::PgStorage`], held in memory behind a `RwLock`.
//! Nothing survives a restart; used for tests and `serve --memory`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use salescript_core::{Playbook, Script, ScriptHistoryEntry, Session, Team, TeamMembership};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{ScriptStore, SessionStore, TeamStore};
use crate::types::{HistoryQuery, SessionUpdate};

#[derive(Debug, Default)]
struct State {
    teams: HashMap<String, (Team, Playbook)>,
    memberships: Vec<TeamMembership>,
    sessions: HashMap<String, Session>,
    /// Insertion order; later entries are newer on equal timestamps.
    scripts: Vec<Script>,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    state: Arc<RwLock<State>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStorage {
    async fn create_session(&self, session: &Session) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        if !state.teams.contains_key(&session.team_id) {
            return Err(StorageError::NotFound { entity: "team", id: session.team_id.clone() });
        }
        if state.sessions.contains_key(&session.id) {
            return Err(StorageError::Duplicate(format!("session {}", session.id)));
        }
        state.sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn get_session(&self, id: &str, team_id: &str) -> Result<Option<Session>, StorageError> {
        let state = self.state.read().await;
        Ok(state.sessions.get(id).filter(|s| s.team_id == team_id).cloned())
    }

    async fn update_session(
        &self,
        id: &str,
        team_id: &str,
        update: &SessionUpdate,
    ) -> Result<Option<Session>, StorageError> {
        let mut state = self.state.write().await;
        let Some(session) = state.sessions.get_mut(id).filter(|s| s.team_id == team_id) else {
            return Ok(None);
        };
        if let Some(status) = update.status {
            session.status = status;
        }
        if let Some(company_name) = &update.company_name {
            session.company_name.clone_from(company_name);
        }
        Ok(Some(session.clone()))
    }
}

#[async_trait]
impl ScriptStore for MemoryStorage {
    async fn save_script(&self, script: &Script) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        if state.scripts.iter().any(|s| s.id == script.id) {
            return Err(StorageError::Duplicate(format!("script {}", script.id)));
        }
        if let Some(session_id) = &script.session_id
            && !state.sessions.contains_key(session_id)
        {
            return Err(StorageError::NotFound { entity: "session", id: session_id.clone() });
        }
        state.scripts.push(script.clone());
        Ok(())
    }

    async fn list_history(
        &self,
        query: &HistoryQuery,
    ) -> Result<Vec<ScriptHistoryEntry>, StorageError> {
        let state = self.state.read().await;
        let mut scripts: Vec<&Script> = state
            .scripts
            .iter()
            .rev()
            .filter(|s| s.created_by == query.created_by)
            .filter(|s| query.session_id.is_none() || s.session_id == query.session_id)
            .collect();
        scripts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(scripts
            .into_iter()
            .take(query.limit)
            .map(|script| {
                let session = script.session_id.as_ref().and_then(|id| state.sessions.get(id));
                ScriptHistoryEntry {
                    id: script.id.clone(),
                    created_at: script.created_at,
                    input: script.input.clone(),
                    raw_output: script.raw_output.clone(),
                    session_id: script.session_id.clone(),
                    company_name: session.and_then(|s| s.company_name.clone()),
                    status: session.map(|s| s.status),
                }
            })
            .collect())
    }

    async fn latest_script(&self, created_by: &str) -> Result<Option<Script>, StorageError> {
        let state = self.state.read().await;
        // max_by_key keeps the last maximum, i.e. the latest insert on equal timestamps
        Ok(state
            .scripts
            .iter()
            .filter(|s| s.created_by == created_by)
            .max_by_key(|s| s.created_at)
            .cloned())
    }
}

#[async_trait]
impl TeamStore for MemoryStorage {
    async fn create_team(&self, team: &Team, owner: &TeamMembership) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        if state.teams.contains_key(&team.id) {
            return Err(StorageError::Duplicate(format!("team {}", team.id)));
        }
        state.teams.insert(team.id.clone(), (team.clone(), Playbook::default()));
        state.memberships.push(owner.clone());
        Ok(())
    }

    async fn get_membership(&self, user_id: &str) -> Result<Option<TeamMembership>, StorageError> {
        let state = self.state.read().await;
        Ok(state
            .memberships
            .iter()
            .filter(|m| m.user_id == user_id)
            .min_by(|a, b| a.joined_at.cmp(&b.joined_at).then_with(|| a.team_id.cmp(&b.team_id)))
            .cloned())
    }

    async fn get_playbook(&self, team_id: &str) -> Result<Option<Playbook>, StorageError> {
        let state = self.state.read().await;
        Ok(state.teams.get(team_id).map(|(_, playbook)| playbook.clone()))
    }

    async fn update_playbook(
        &self,
        team_id: &str,
        playbook: &Playbook,
    ) -> Result<bool, StorageError> {
        let mut state = self.state.write().await;
        let Some((_, current)) = state.teams.get_mut(team_id) else {
            return Ok(false);
        };
        *current = playbook.clone();
        Ok(true)
    }
}
