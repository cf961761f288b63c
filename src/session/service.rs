use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    models::MeditationSessionModel, repository::SessionRepository, timestamp::parse_timestamp,
    types::CreateSessionRequest,
};
use crate::shared::{present, AppError};

/// Service for saving and listing meditation sessions
pub struct SessionService {
    repository: Arc<dyn SessionRepository + Send + Sync>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Saves one session record and returns its ID
    ///
    /// Only presence and timestamp syntax are checked. The user ID is not
    /// resolved, and neither the duration sign nor the start/end order is
    /// enforced.
    #[instrument(skip(self))]
    pub async fn create_session(&self, request: CreateSessionRequest) -> Result<String, AppError> {
        let user_id = present(request.user_id);
        let start_time = present(request.start_time);
        let end_time = present(request.end_time);

        let (user_id, duration, start_time, end_time) =
            match (user_id, request.duration, start_time, end_time) {
                (Some(user_id), Some(duration), Some(start), Some(end)) => {
                    (user_id, duration, start, end)
                }
                (user_id, duration, start, end) => {
                    let missing: Vec<&'static str> = [
                        ("userId", user_id.is_none()),
                        ("duration", duration.is_none()),
                        ("startTime", start.is_none()),
                        ("endTime", end.is_none()),
                    ]
                    .into_iter()
                    .filter_map(|(field, absent)| absent.then_some(field))
                    .collect();
                    return Err(AppError::MissingFields(missing));
                }
            };

        let start_time = parse_timestamp("startTime", &start_time)?;
        let end_time = parse_timestamp("endTime", &end_time)?;

        let session = MeditationSessionModel::new(user_id, duration, start_time, end_time);
        debug!(session_id = %session.id, "Generated session ID");

        self.repository.create_session(&session).await?;

        info!(
            session_id = %session.id,
            user_id = %session.user_id,
            duration = session.duration,
            "Session saved successfully"
        );
        Ok(session.id)
    }

    /// Lists a user's sessions, oldest first
    ///
    /// A user with no sessions is reported as `NotFound`.
    #[instrument(skip(self))]
    pub async fn list_sessions(
        &self,
        user_id: &str,
    ) -> Result<Vec<MeditationSessionModel>, AppError> {
        let sessions = self.repository.list_sessions_by_user(user_id).await?;

        if sessions.is_empty() {
            debug!(user_id = %user_id, "No sessions recorded for user");
            return Err(AppError::NotFound(
                "No sessions found for this user".to_string(),
            ));
        }

        info!(user_id = %user_id, session_count = sessions.len(), "Sessions retrieved");
        Ok(sessions)
    }
}
