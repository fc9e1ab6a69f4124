//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

mod scripts;
mod sessions;
mod teams;

use crate::error::StorageError;
use chrono::{DateTime, Utc};
use salescript_core::{
    MemberRole, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
    Playbook, SalesMotion, Script, ScriptHistoryEntry, ScriptSections, Session, SessionStatus,
    TeamMembership,
};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use super::pg_migrations::run_pg_migrations;

const SESSION_COLUMNS: &str = "id, team_id, created_by, company_name, status, created_at";

const SCRIPT_COLUMNS: &str = "id, created_at, session_id, team_id, created_by, input, raw_output, \
     summary, opening, qualifying_questions, value_framing, objections, closing, coach_tips";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect and apply migrations.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let storage = Self::connect(database_url).await?;
        storage.migrate().await?;
        tracing::info!("PgStorage initialized");
        Ok(storage)
    }

    /// Connect without touching the schema.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), StorageError> {
        run_pg_migrations(&self.pool).await.map_err(|e| StorageError::Migration(e.to_string()))
    }
}

fn parse_status(raw: &str) -> Result<SessionStatus, StorageError> {
    Ok(raw.parse::<SessionStatus>()?)
}

/// Parse `SalesMotion` from the teams table, defaulting on unknown values.
fn parse_sales_motion(raw: &str) -> SalesMotion {
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(invalid_motion = %raw, "corrupt sales_motion in DB, defaulting to smb");
        SalesMotion::default()
    })
}

pub(crate) fn row_to_session(row: &PgRow) -> Result<Session, StorageError> {
    Ok(Session {
        id: row.try_get("id")?,
        team_id: row.try_get("team_id")?,
        created_by: row.try_get("created_by")?,
        company_name: row.try_get("company_name")?,
        status: parse_status(&row.try_get::<String, _>("status")?)?,
        created_at: row.try_get("created_at")?,
    })
}

pub(crate) fn row_to_script(row: &PgRow) -> Result<Script, StorageError> {
    Ok(Script {
        id: row.try_get("id")?,
        created_at: row.try_get("created_at")?,
        session_id: row.try_get("session_id")?,
        team_id: row.try_get("team_id")?,
        created_by: row.try_get("created_by")?,
        input: row.try_get("input")?,
        raw_output: row.try_get("raw_output")?,
        sections: ScriptSections {
            summary: row.try_get("summary")?,
            opening: row.try_get("opening")?,
            qualifying_questions: row.try_get("qualifying_questions")?,
            value_framing: row.try_get("value_framing")?,
            objections: row.try_get("objections")?,
            closing: row.try_get("closing")?,
            coach_tips: row.try_get("coach_tips")?,
        },
    })
}

pub(crate) fn row_to_history_entry(row: &PgRow) -> Result<ScriptHistoryEntry, StorageError> {
    let status =
        row.try_get::<Option<String>, _>("status")?.as_deref().map(parse_status).transpose()?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(ScriptHistoryEntry {
        id: row.try_get("id")?,
        created_at,
        input: row.try_get("input")?,
        raw_output: row.try_get("raw_output")?,
        session_id: row.try_get("session_id")?,
        company_name: row.try_get("company_name")?,
        status,
    })
}

pub(crate) fn row_to_membership(row: &PgRow) -> Result<TeamMembership, StorageError> {
    Ok(TeamMembership {
        team_id: row.try_get("team_id")?,
        user_id: row.try_get("user_id")?,
        role: row.try_get::<String, _>("role")?.parse::<MemberRole>()?,
        joined_at: row.try_get("joined_at")?,
    })
}

pub(crate) fn row_to_playbook(row: &PgRow) -> Result<Playbook, StorageError> {
    Ok(Playbook {
        sales_motion: parse_sales_motion(&row.try_get::<String, _>("sales_motion")?),
        tone_default: row.try_get("tone_default")?,
        no_go_phrases: row.try_get("no_go_phrases")?,
        primary_objections: row.try_get("primary_objections")?,
    })
}
