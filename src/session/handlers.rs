use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::MeditationSessionModel,
    service::SessionService,
    types::{CreateSessionRequest, SessionCreatedResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for saving a meditation session
///
/// POST /api/sessions
/// Returns 201 with the stored session's ID
#[instrument(name = "create_session", skip_all)]
pub async fn create_session(
    State(state): State<AppState>,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionCreatedResponse>), AppError> {
    let Json(request) = payload?;
    let service = SessionService::new(Arc::clone(&state.session_repository));
    let id = service.create_session(request).await?;

    info!(session_id = %id, "Session creation handled");

    Ok((
        StatusCode::CREATED,
        Json(SessionCreatedResponse {
            message: "Session saved successfully".to_string(),
            id,
        }),
    ))
}

/// HTTP handler for a user's meditation history
///
/// GET /api/sessions/:user_id
#[instrument(name = "list_sessions", skip(state))]
pub async fn list_sessions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<MeditationSessionModel>>, AppError> {
    let service = SessionService::new(Arc::clone(&state.session_repository));
    let sessions = service.list_sessions(&user_id).await?;

    info!(session_count = sessions.len(), "History listed successfully");

    Ok(Json(sessions))
}
