use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::session::repository::SessionRepository;
use crate::user::{password::PasswordHasher, repository::UserRepository};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserRepository + Send + Sync>,
    pub session_repository: Arc<dyn SessionRepository + Send + Sync>,
    pub password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl AppState {
    pub fn new(
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        session_repository: Arc<dyn SessionRepository + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            user_repository,
            session_repository,
            password_hasher,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Body that could not be read as the expected JSON document; keeps the
    /// extractor's status (400 syntax, 415 content type, 422 shape)
    #[error("Invalid request body")]
    InvalidBody(StatusCode),

    #[error("Invalid timestamp for {0}")]
    InvalidTimestamp(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Password hashing error: {0}")]
    HashingError(String),

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(status) => *status,
            AppError::MissingFields(_)
            | AppError::InvalidTimestamp(_)
            | AppError::AlreadyExists(_)
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::HashingError(_) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal detail stays in the log; clients only see the failure class
        let error_message = if status.is_server_error() {
            error!(error = %self, "Request failed with internal error");
            "Internal server error".to_string()
        } else {
            warn!(error = %self, status = status.as_u16(), "Request rejected");
            match self {
                AppError::NotFound(msg) | AppError::AlreadyExists(msg) => msg,
                other => other.to_string(),
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(detail = %rejection.body_text(), "JSON body rejected");
        AppError::InvalidBody(rejection.status())
    }
}

/// Returns the value if it is present and not blank
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Returns the value if it is present and non-empty; whitespace counts as content
pub(crate) fn present_secret(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
