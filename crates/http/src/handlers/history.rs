use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{HistoryParams, HistoryResponse, LatestScriptResponse};
use crate::identity::CallerId;

pub async fn list_scripts(
    State(state): State<Arc<AppState>>,
    caller: CallerId,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let scripts = state
        .history_service
        .list_history(caller.as_deref(), params.limit, params.session_id.as_deref())
        .await?;
    Ok(Json(HistoryResponse { scripts }))
}

pub async fn latest_script(
    State(state): State<Arc<AppState>>,
    caller: CallerId,
) -> Result<Json<LatestScriptResponse>, ApiError> {
    let script = state.history_service.latest_script(caller.as_deref()).await?;
    Ok(Json(LatestScriptResponse { script }))
}
