use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{GenerateRequest, GenerateResponse};
use crate::identity::CallerId;

pub async fn generate(
    State(state): State<Arc<AppState>>,
    caller: CallerId,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(req) = payload?;
    let generated = state
        .generation_service
        .generate(caller.as_deref(), req.input_text(), req.session_id.as_deref())
        .await?;
    Ok(Json(generated.into()))
}
