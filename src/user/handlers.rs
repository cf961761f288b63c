use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::UserService,
    types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
};
use crate::shared::{AppError, AppState};

fn user_service(state: &AppState) -> UserService {
    UserService::new(
        Arc::clone(&state.user_repository),
        Arc::clone(&state.password_hasher),
    )
}

/// HTTP handler for registering a new user
///
/// POST /api/register
/// Returns 201 with the new user's ID
#[instrument(name = "register", skip_all)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let Json(request) = payload?;
    let id = user_service(&state).register(request).await?;

    info!(user_id = %id, "Registration handled");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            id,
        }),
    ))
}

/// HTTP handler for logging in
///
/// POST /api/login
/// Returns the stored user (without password hash)
#[instrument(name = "login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(request) = payload?;
    let user = user_service(&state).login(request).await?;

    info!(user_id = %user.id, "Login handled");

    Ok(Json(LoginResponse {
        user,
        message: "Login successful".to_string(),
    }))
}
