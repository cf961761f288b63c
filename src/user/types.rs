use serde::{Deserialize, Serialize};

use super::models::UserModel;

/// Request payload for registering a new user
///
/// Fields are optional so that absent values surface as `MissingFields`
/// rather than a deserialization rejection.
#[derive(Deserialize, Default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request payload for logging in
#[derive(Deserialize, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response for a successful registration
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RegisterResponse {
    pub message: String,
    pub id: String,
}

/// Public view of a stored user, without the password hash
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<UserModel> for UserResponse {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Response for a successful login
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub message: String,
}
