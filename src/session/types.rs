use serde::{Deserialize, Serialize};

/// Request payload for saving a meditation session
///
/// All fields are optional at the wire level; presence is checked by the
/// service so a partial body yields `MissingFields`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub user_id: Option<String>,
    pub duration: Option<f64>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Response for a saved session
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionCreatedResponse {
    pub message: String,
    pub id: String,
}
