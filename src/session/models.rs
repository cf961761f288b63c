use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the meditation_sessions table
///
/// Serialized in camelCase, which is also the API shape of a history entry.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeditationSessionModel {
    pub id: String,      // UUID v4 as string
    pub user_id: String, // Not checked against the users table
    pub duration: f64,   // Seconds
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl MeditationSessionModel {
    /// Creates a new session record with a generated ID
    pub fn new(
        user_id: String,
        duration: f64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            duration,
            start_time,
            end_time,
            created_at: Utc::now(),
        }
    }
}
