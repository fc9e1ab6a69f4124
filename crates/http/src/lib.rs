//! HTTP API server for salescript.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod api_types;
mod handlers;
mod identity;


use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use salescript_service::{GenerationService, HistoryService, SessionService, TeamService};
use salescript_storage::SalesStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use api_types::{GenerateResponse, VersionResponse};
pub use identity::{CallerId, USER_ID_HEADER};

/// Shared application state for all HTTP handlers.
///
/// Built once by the entry point and wrapped in `Arc`.
pub struct AppState {
    /// One completion call per request, then best-effort persistence
    pub generation_service: Arc<GenerationService>,
    pub session_service: Arc<SessionService>,
    /// Script history of the requesting user
    pub history_service: Arc<HistoryService>,
    /// Team creation and playbook
    pub team_service: Arc<TeamService>,
}

impl AppState {
    /// Wire every service to the same store.
    #[must_use]
    pub fn new(store: Arc<dyn SalesStore>, generation_service: GenerationService) -> Self {
        Self {
            generation_service: Arc::new(generation_service),
            session_service: Arc::new(SessionService::new(Arc::clone(&store))),
            history_service: Arc::new(HistoryService::new(Arc::clone(&store))),
            team_service: Arc::new(TeamService::new(store)),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/generate", post(handlers::generate::generate))
        .route("/api/sessions", post(handlers::sessions::create_session))
        .route(
            "/api/sessions/{id}",
            get(handlers::sessions::get_session).patch(handlers::sessions::update_session),
        )
        .route("/api/scripts", get(handlers::history::list_scripts))
        .route("/api/latest-script", get(handlers::history::latest_script))
        .route("/api/teams", post(handlers::teams::create_team))
        .route(
            "/api/team/playbook",
            get(handlers::teams::get_playbook).put(handlers::teams::update_playbook),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
