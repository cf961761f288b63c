use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::session::repository::{InMemorySessionRepository, PostgresSessionRepository};
use crate::shared::{AppError, AppState};
use crate::user::password::Argon2Hasher;
use crate::user::repository::{InMemoryUserRepository, PostgresUserRepository};

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
)";

const CREATE_SESSIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS meditation_sessions (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    duration DOUBLE PRECISION NOT NULL,
    start_time TIMESTAMPTZ NOT NULL,
    end_time TIMESTAMPTZ NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
)";

const CREATE_SESSIONS_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS meditation_sessions_user_id_idx ON meditation_sessions (user_id, created_at)";

/// Opens the process-wide connection pool
#[instrument(skip(database_url))]
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to connect to database");
            AppError::DatabaseError(e.to_string())
        })?;

    info!("Connected to database");
    Ok(pool)
}

/// Creates the tables and the history index if they are missing
#[instrument(skip_all)]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for statement in [
        CREATE_USERS_TABLE,
        CREATE_SESSIONS_TABLE,
        CREATE_SESSIONS_USER_INDEX,
    ] {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            warn!(error = %e, "Failed to apply schema statement");
            AppError::DatabaseError(e.to_string())
        })?;
    }

    info!("Database schema ready");
    Ok(())
}

/// Builds the application state with PostgreSQL-backed repositories
pub fn postgres_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(PostgresSessionRepository::new(pool)),
        Arc::new(Argon2Hasher::new()),
    )
}

/// Builds the application state with in-memory repositories
pub fn in_memory_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemorySessionRepository::new()),
        Arc::new(Argon2Hasher::new()),
    )
}
