use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use salescript_service::PlaybookUpdate;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{CreateTeamRequest, PlaybookResponse, TeamResponse};
use crate::identity::CallerId;

pub async fn create_team(
    State(state): State<Arc<AppState>>,
    caller: CallerId,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let Json(req) = payload?;
    let team = state.team_service.create_team(caller.as_deref(), &req.name).await?;
    Ok((StatusCode::CREATED, Json(TeamResponse { team })))
}

pub async fn get_playbook(
    State(state): State<Arc<AppState>>,
    caller: CallerId,
) -> Result<Json<PlaybookResponse>, ApiError> {
    let playbook = state.team_service.get_playbook(caller.as_deref()).await?;
    Ok(Json(PlaybookResponse { playbook }))
}

pub async fn update_playbook(
    State(state): State<Arc<AppState>>,
    caller: CallerId,
    payload: Result<Json<PlaybookUpdate>, JsonRejection>,
) -> Result<Json<PlaybookResponse>, ApiError> {
    let Json(update) = payload?;
    let playbook = state.team_service.update_playbook(caller.as_deref(), update).await?;
    Ok(Json(PlaybookResponse { playbook }))
}
