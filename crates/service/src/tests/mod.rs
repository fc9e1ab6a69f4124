//! Test utilities and module declarations for service tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use salescript_core::{
    MemberRole, Playbook, Script, ScriptHistoryEntry, Session, Team, TeamMembership,
};
use salescript_llm::{LlmClient, LlmConfig};
use salescript_storage::{
    HistoryQuery, MemoryStorage, SalesStore, ScriptStore, SessionStore, SessionUpdate,
    StorageError, TeamStore,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{GenerationConfig, GenerationService};

pub const FULL_OUTPUT: &str = "[SUMMARY]\nAcme needs pipeline\n[OPENING]\nYou are losing deals\n\
[QUALIFYING QUESTIONS]\nWho signs?\n[VALUE FRAMING]\n- faster\n[OBJECTIONS]\nToo pricey? No.\n\
[CLOSING]\nTuesday at ten\n[COACH TIPS]\n- be brief";

/// Memory store with `team-a` (owner `alice`) and `team-b` (owner `bob`).
/// `carol` exists as an identity without any team.
pub async fn create_test_store() -> MemoryStorage {
    let store = MemoryStorage::new();
    for (team_id, owner) in [("team-a", "alice"), ("team-b", "bob")] {
        let now = Utc::now();
        let team = Team {
            id: team_id.to_owned(),
            name: format!("Team {team_id}"),
            owner_id: owner.to_owned(),
            created_at: now,
        };
        let membership = TeamMembership {
            team_id: team_id.to_owned(),
            user_id: owner.to_owned(),
            role: MemberRole::Owner,
            joined_at: now,
        };
        store.create_team(&team, &membership).await.unwrap();
    }
    store
}

pub fn create_llm(server: &MockServer) -> Arc<LlmClient> {
    Arc::new(LlmClient::new(LlmConfig::new("test-key".to_owned(), server.uri())).unwrap())
}

pub fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "choices": [{ "message": { "content": content, "role": "assistant" } }]
    }))
}

/// Mounts a completion mock that must be hit exactly `times` times.
pub async fn mock_completion(server: &MockServer, content: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(completion(content))
        .expect(times)
        .mount(server)
        .await;
}

pub fn create_generation_service(
    store: Arc<dyn SalesStore>,
    server: &MockServer,
    config: GenerationConfig,
) -> GenerationService {
    GenerationService::new(store, create_llm(server), config)
}

/// Delegates to a [`MemoryStorage`], failing selected writes.
pub struct FlakyStore {
    pub inner: MemoryStorage,
    pub fail_scripts: bool,
    pub fail_sessions: bool,
}

fn unavailable() -> StorageError {
    StorageError::Migration("store unavailable".to_owned())
}

#[async_trait]
impl SessionStore for FlakyStore {
    async fn create_session(&self, session: &Session) -> Result<(), StorageError> {
        if self.fail_sessions {
            return Err(unavailable());
        }
        self.inner.create_session(session).await
    }

    async fn get_session(&self, id: &str, team_id: &str) -> Result<Option<Session>, StorageError> {
        self.inner.get_session(id, team_id).await
    }

    async fn update_session(
        &self,
        id: &str,
        team_id: &str,
        update: &SessionUpdate,
    ) -> Result<Option<Session>, StorageError> {
        self.inner.update_session(id, team_id, update).await
    }
}

#[async_trait]
impl ScriptStore for FlakyStore {
    async fn save_script(&self, script: &Script) -> Result<(), StorageError> {
        if self.fail_scripts {
            return Err(unavailable());
        }
        self.inner.save_script(script).await
    }

    async fn list_history(
        &self,
        query: &HistoryQuery,
    ) -> Result<Vec<ScriptHistoryEntry>, StorageError> {
        self.inner.list_history(query).await
    }

    async fn latest_script(&self, created_by: &str) -> Result<Option<Script>, StorageError> {
        self.inner.latest_script(created_by).await
    }
}

#[async_trait]
impl TeamStore for FlakyStore {
    async fn create_team(&self, team: &Team, owner: &TeamMembership) -> Result<(), StorageError> {
        self.inner.create_team(team, owner).await
    }

    async fn get_membership(&self, user_id: &str) -> Result<Option<TeamMembership>, StorageError> {
        self.inner.get_membership(user_id).await
    }

    async fn get_playbook(&self, team_id: &str) -> Result<Option<Playbook>, StorageError> {
        self.inner.get_playbook(team_id).await
    }

    async fn update_playbook(
        &self,
        team_id: &str,
        playbook: &Playbook,
    ) -> Result<bool, StorageError> {
        self.inner.update_playbook(team_id, playbook).await
    }
}
