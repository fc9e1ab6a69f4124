//! Test utilities and module declarations for storage tests.

use chrono::{DateTime, Duration, Utc};
use salescript_core::{MemberRole, Script, Session, Team, TeamMembership};

use crate::MemoryStorage;
use crate::traits::TeamStore;

pub fn create_test_team(id: &str, owner: &str) -> (Team, TeamMembership) {
    let now = Utc::now();
    let team = Team {
        id: id.to_owned(),
        name: format!("Team {id}"),
        owner_id: owner.to_owned(),
        created_at: now,
    };
    let membership = TeamMembership {
        team_id: id.to_owned(),
        user_id: owner.to_owned(),
        role: MemberRole::Owner,
        joined_at: now,
    };
    (team, membership)
}

/// Storage with two teams: `team-a` owned by `alice`, `team-b` owned by `bob`.
pub async fn create_test_storage() -> MemoryStorage {
    let storage = MemoryStorage::new();
    for (team_id, owner) in [("team-a", "alice"), ("team-b", "bob")] {
        let (team, membership) = create_test_team(team_id, owner);
        storage.create_team(&team, &membership).await.unwrap();
    }
    storage
}

pub fn create_test_session(id: &str, team_id: &str, created_by: &str) -> Session {
    Session::new(id.to_owned(), team_id.to_owned(), created_by.to_owned(), None, Utc::now())
}

pub fn create_test_script(
    id: &str,
    session_id: Option<&str>,
    created_by: &str,
    created_at: DateTime<Utc>,
) -> Script {
    Script::from_output(
        id.to_owned(),
        created_at,
        session_id.map(ToOwned::to_owned),
        "team-a".to_owned(),
        created_by.to_owned(),
        format!("input for {id}"),
        format!("[SUMMARY]\nsummary {id}\n[CLOSING]\nclose {id}"),
    )
}

pub fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    Utc::now() - Duration::minutes(minutes)
}

mod team_tests;
