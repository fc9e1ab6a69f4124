use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "salescript")]
#[command(about = "Sales call script generator with session tracking", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Keep everything in memory instead of PostgreSQL (nothing survives a restart)
        #[arg(long)]
        memory: bool,
    },
    /// Apply PostgreSQL migrations against DATABASE_URL
    Migrate,
    /// Split model output into its sections and print them as JSON
    Parse {
        /// File with raw model output; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

pub(crate) fn get_database_url() -> Result<String> {
    salescript_core::env_string("DATABASE_URL")
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable must be set"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, memory } => commands::serve::run(port, host, memory).await?,
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Parse { file } => commands::parse::run(file.as_deref())?,
    }

    Ok(())
}
