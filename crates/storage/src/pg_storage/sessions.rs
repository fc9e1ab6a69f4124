//! SessionStore implementation for PgStorage.

use super::*;

use crate::error::StorageError;
use crate::traits::SessionStore;
use crate::types::SessionUpdate;
use async_trait::async_trait;

#[async_trait]
impl SessionStore for PgStorage {
    async fn create_session(&self, session: &Session) -> Result<(), StorageError> {
        sqlx::query(&format!(
            "INSERT INTO sessions ({SESSION_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6)"
        ))
        .bind(&session.id)
        .bind(&session.team_id)
        .bind(&session.created_by)
        .bind(&session.company_name)
        .bind(session.status.as_str())
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_session(&self, id: &str, team_id: &str) -> Result<Option<Session>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions WHERE id = $1 AND team_id = $2"
        ))
        .bind(id)
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_session(&r)).transpose()
    }

    async fn update_session(
        &self,
        id: &str,
        team_id: &str,
        update: &SessionUpdate,
    ) -> Result<Option<Session>, StorageError> {
        let set_company_name = update.company_name.is_some();
        let company_name = update.company_name.clone().flatten();
        let row = sqlx::query(&format!(
            "UPDATE sessions SET
               status = COALESCE($3, status),
               company_name = CASE WHEN $4 THEN $5 ELSE company_name END
             WHERE id = $1 AND team_id = $2
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(id)
        .bind(team_id)
        .bind(update.status.map(|s| s.as_str()))
        .bind(set_company_name)
        .bind(company_name)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_session(&r)).transpose()
    }
}
