//! Apply the PostgreSQL schema. Idempotent: every statement is `IF NOT EXISTS`.

use anyhow::Result;
use salescript_storage::PgStorage;

use crate::get_database_url;

pub(crate) async fn run() -> Result<()> {
    let storage = PgStorage::connect(&get_database_url()?).await?;
    storage.migrate().await?;
    println!("Migrations applied.");
    Ok(())
}
