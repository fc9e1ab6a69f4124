//! PostgreSQL schema migrations for salescript storage.
//!
//! Every statement is idempotent, so running them on each start is safe.

use sqlx::PgPool;

/// Run all PostgreSQL migrations.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teams (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            owner_id TEXT NOT NULL,
            sales_motion TEXT NOT NULL DEFAULT 'smb',
            tone_default TEXT,
            no_go_phrases TEXT,
            primary_objections TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS team_members (
            team_id TEXT NOT NULL REFERENCES teams (id) ON DELETE CASCADE,
            user_id TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'member',
            joined_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            PRIMARY KEY (team_id, user_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_team_members_user ON team_members (user_id)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id TEXT PRIMARY KEY,
            team_id TEXT NOT NULL REFERENCES teams (id) ON DELETE CASCADE,
            created_by TEXT NOT NULL,
            company_name TEXT,
            status TEXT NOT NULL DEFAULT 'active'
                CHECK (status IN ('active', 'demo_booked', 'won', 'lost')),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_sessions_team ON sessions (team_id)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sales_scripts (
            id TEXT PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            session_id TEXT REFERENCES sessions (id) ON DELETE SET NULL,
            team_id TEXT NOT NULL,
            created_by TEXT NOT NULL,
            input TEXT NOT NULL,
            raw_output TEXT NOT NULL,
            summary TEXT NOT NULL DEFAULT '',
            opening TEXT NOT NULL DEFAULT '',
            qualifying_questions TEXT NOT NULL DEFAULT '',
            value_framing TEXT NOT NULL DEFAULT '',
            objections TEXT NOT NULL DEFAULT '',
            closing TEXT NOT NULL DEFAULT '',
            coach_tips TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_scripts_creator_created
         ON sales_scripts (created_by, created_at DESC)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_scripts_session ON sales_scripts (session_id)")
        .execute(pool)
        .await?;

    tracing::debug!("PostgreSQL migrations applied");
    Ok(())
}
