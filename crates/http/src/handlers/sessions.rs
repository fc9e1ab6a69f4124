use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{CreateSessionRequest, SessionResponse, UpdateSessionRequest};
use crate::identity::CallerId;

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    caller: CallerId,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let Json(req) = payload?;
    let session = state
        .session_service
        .create_session(caller.as_deref(), req.company_name.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(SessionResponse { session })))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    caller: CallerId,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.session_service.get_session(caller.as_deref(), &id).await?;
    Ok(Json(SessionResponse { session }))
}

pub async fn update_session(
    State(state): State<Arc<AppState>>,
    caller: CallerId,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSessionRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, ApiError> {
    let Json(req) = payload?;
    let session = state
        .session_service
        .update_session(
            caller.as_deref(),
            &id,
            req.status_text().as_deref(),
            req.company_name_text(),
        )
        .await?;
    Ok(Json(SessionResponse { session }))
}
