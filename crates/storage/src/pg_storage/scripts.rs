//! ScriptStore implementation for PgStorage.

use super::*;

use crate::error::StorageError;
use crate::traits::ScriptStore;
use crate::types::HistoryQuery;
use async_trait::async_trait;

#[async_trait]
impl ScriptStore for PgStorage {
    async fn save_script(&self, script: &Script) -> Result<(), StorageError> {
        let sections = &script.sections;
        sqlx::query(&format!(
            "INSERT INTO sales_scripts ({SCRIPT_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)"
        ))
        .bind(&script.id)
        .bind(script.created_at)
        .bind(&script.session_id)
        .bind(&script.team_id)
        .bind(&script.created_by)
        .bind(&script.input)
        .bind(&script.raw_output)
        .bind(&sections.summary)
        .bind(&sections.opening)
        .bind(&sections.qualifying_questions)
        .bind(&sections.value_framing)
        .bind(&sections.objections)
        .bind(&sections.closing)
        .bind(&sections.coach_tips)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_history(
        &self,
        query: &HistoryQuery,
    ) -> Result<Vec<ScriptHistoryEntry>, StorageError> {
        let limit = i64::try_from(query.limit).unwrap_or(i64::MAX);
        let rows = sqlx::query(
            "SELECT s.id, s.created_at, s.input, s.raw_output, s.session_id,
                    se.company_name, se.status
             FROM sales_scripts s
             LEFT JOIN sessions se ON se.id = s.session_id
             WHERE s.created_by = $1
               AND ($2::TEXT IS NULL OR s.session_id = $2)
             ORDER BY s.created_at DESC, s.id DESC
             LIMIT $3",
        )
        .bind(&query.created_by)
        .bind(&query.session_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_history_entry).collect()
    }

    async fn latest_script(&self, created_by: &str) -> Result<Option<Script>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {SCRIPT_COLUMNS} FROM sales_scripts
             WHERE created_by = $1
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        ))
        .bind(created_by)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_script(&r)).transpose()
    }
}
