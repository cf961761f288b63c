use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::MeditationSessionModel;
use crate::shared::AppError;

/// Trait for meditation session repository operations
#[async_trait]
pub trait SessionRepository {
    async fn create_session(&self, session: &MeditationSessionModel) -> Result<(), AppError>;

    /// Returns every record whose `user_id` matches, oldest first
    async fn list_sessions_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<MeditationSessionModel>, AppError>;
}

/// In-memory implementation of SessionRepository for development and testing
///
/// Records are kept in insertion order.
pub struct InMemorySessionRepository {
    sessions: Mutex<Vec<MeditationSessionModel>>,
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(Vec::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated sessions
    pub fn with_sessions(sessions: Vec<MeditationSessionModel>) -> Self {
        Self {
            sessions: Mutex::new(sessions),
        }
    }

    /// Returns the current number of sessions in the repository
    pub fn session_count(&self) -> usize {
        self.sessions.lock().map(|sessions| sessions.len()).unwrap_or(0)
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    #[instrument(skip(self, session))]
    async fn create_session(&self, session: &MeditationSessionModel) -> Result<(), AppError> {
        debug!(session_id = %session.id, user_id = %session.user_id, "Creating session in memory");

        let mut sessions = self.sessions.lock().map_err(|_| AppError::Internal)?;
        if sessions.iter().any(|s| s.id == session.id) {
            warn!(session_id = %session.id, "Session already exists in memory");
            return Err(AppError::DatabaseError(
                "Session already exists".to_string(),
            ));
        }
        sessions.push(session.clone());

        debug!(session_id = %session.id, "Session created successfully in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_sessions_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<MeditationSessionModel>, AppError> {
        debug!(user_id = %user_id, "Listing sessions from memory");

        let sessions = self.sessions.lock().map_err(|_| AppError::Internal)?;
        let matching: Vec<MeditationSessionModel> = sessions
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();

        debug!(user_id = %user_id, count = matching.len(), "Sessions listed from memory");
        Ok(matching)
    }
}

/// PostgreSQL implementation of session repository
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    #[instrument(skip(self, session))]
    async fn create_session(&self, session: &MeditationSessionModel) -> Result<(), AppError> {
        debug!(session_id = %session.id, user_id = %session.user_id, "Creating session in database");

        sqlx::query(
            "INSERT INTO meditation_sessions (id, user_id, duration, start_time, end_time, created_at) VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&session.id)
        .bind(&session.user_id)
        .bind(session.duration)
        .bind(session.start_time)
        .bind(session.end_time)
        .bind(session.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create session in database");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!(session_id = %session.id, "Session created successfully in database");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_sessions_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<MeditationSessionModel>, AppError> {
        debug!(user_id = %user_id, "Listing sessions from database");

        let sessions = sqlx::query_as::<_, MeditationSessionModel>(
            "SELECT id, user_id, duration, start_time, end_time, created_at FROM meditation_sessions WHERE user_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, user_id = %user_id, "Failed to list sessions from database");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!(user_id = %user_id, count = sessions.len(), "Sessions listed from database");
        Ok(sessions)
    }
}
