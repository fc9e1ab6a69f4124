use async_trait::async_trait;
use salescript_core::{Playbook, Team, TeamMembership};

use crate::error::StorageError;

/// Teams, memberships and playbooks.
#[async_trait]
pub trait TeamStore: Send + Sync {
    /// Insert a team together with its owner membership.
    async fn create_team(&self, team: &Team, owner: &TeamMembership) -> Result<(), StorageError>;

    /// The user's earliest team membership.
    async fn get_membership(&self, user_id: &str) -> Result<Option<TeamMembership>, StorageError>;

    /// Playbook stored on the team, `None` if the team does not exist.
    async fn get_playbook(&self, team_id: &str) -> Result<Option<Playbook>, StorageError>;

    /// Replace the team playbook. Returns `false` if the team does not exist.
    async fn update_playbook(
        &self,
        team_id: &str,
        playbook: &Playbook,
    ) -> Result<bool, StorageError>;
}
