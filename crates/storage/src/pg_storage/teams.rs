//! TeamStore implementation for PgStorage.

use super::*;

use crate::error::StorageError;
use crate::traits::TeamStore;
use async_trait::async_trait;
use salescript_core::Team;

#[async_trait]
impl TeamStore for PgStorage {
    async fn create_team(&self, team: &Team, owner: &TeamMembership) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("INSERT INTO teams (id, name, owner_id, created_at) VALUES ($1, $2, $3, $4)")
            .bind(&team.id)
            .bind(&team.name)
            .bind(&team.owner_id)
            .bind(team.created_at)
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "INSERT INTO team_members (team_id, user_id, role, joined_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(&owner.team_id)
        .bind(&owner.user_id)
        .bind(owner.role.as_str())
        .bind(owner.joined_at)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn get_membership(&self, user_id: &str) -> Result<Option<TeamMembership>, StorageError> {
        let row = sqlx::query(
            "SELECT team_id, user_id, role, joined_at FROM team_members
             WHERE user_id = $1
             ORDER BY joined_at ASC, team_id ASC
             LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_membership(&r)).transpose()
    }

    async fn get_playbook(&self, team_id: &str) -> Result<Option<Playbook>, StorageError> {
        let row = sqlx::query(
            "SELECT sales_motion, tone_default, no_go_phrases, primary_objections
             FROM teams WHERE id = $1",
        )
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_playbook(&r)).transpose()
    }

    async fn update_playbook(
        &self,
        team_id: &str,
        playbook: &Playbook,
    ) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "UPDATE teams SET sales_motion = $2, tone_default = $3,
                    no_go_phrases = $4, primary_objections = $5
             WHERE id = $1",
        )
        .bind(team_id)
        .bind(playbook.sales_motion.as_str())
        .bind(&playbook.tone_default)
        .bind(&playbook.no_go_phrases)
        .bind(&playbook.primary_objections)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
