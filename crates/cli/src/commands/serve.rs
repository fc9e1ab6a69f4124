use anyhow::Result;
use salescript_http::{AppState, create_router};
use salescript_llm::{LlmClient, LlmConfig};
use salescript_service::{GenerationConfig, GenerationService};
use salescript_storage::{MemoryStorage, PgStorage, SalesStore};
use std::sync::Arc;

use crate::get_database_url;

pub(crate) async fn run(port: u16, host: String, memory: bool) -> Result<()> {
    let llm_config = LlmConfig::from_env()?;
    tracing::info!(model = %llm_config.model, base_url = %llm_config.base_url, "LLM configured");
    let llm = Arc::new(LlmClient::new(llm_config)?);

    let store: Arc<dyn SalesStore> = if memory {
        tracing::warn!("Using in-memory storage; data is lost on shutdown");
        Arc::new(MemoryStorage::new())
    } else {
        Arc::new(PgStorage::new(&get_database_url()?).await?)
    };

    let generation_config = GenerationConfig::from_env();
    tracing::info!(
        closed_session_policy = %generation_config.closed_session_policy,
        language = %generation_config.language,
        "Generation configured"
    );
    let generation_service = GenerationService::new(Arc::clone(&store), llm, generation_config);
    let state = Arc::new(AppState::new(store, generation_service));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
