use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    models::UserModel,
    password::PasswordHasher,
    repository::UserRepository,
    types::{LoginRequest, RegisterRequest, UserResponse},
};
use crate::shared::{present, present_secret, AppError};

/// Service for user registration and login
pub struct UserService {
    repository: Arc<dyn UserRepository + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepository + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    /// Registers a new user and returns the stored user's ID
    ///
    /// The email lookup and the insert are separate store calls; a concurrent
    /// registration that slips between them is still rejected by the store.
    #[instrument(skip_all)]
    pub async fn register(&self, request: RegisterRequest) -> Result<String, AppError> {
        let (name, email, password) = match (
            present(request.name),
            present(request.email),
            present_secret(request.password),
        ) {
            (Some(name), Some(email), Some(password)) => (name, email, password),
            (name, email, password) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push("name");
                }
                if email.is_none() {
                    missing.push("email");
                }
                if password.is_none() {
                    missing.push("password");
                }
                return Err(AppError::MissingFields(missing));
            }
        };

        info!(email = %email, "Registering user");

        if self.repository.find_user_by_email(&email).await?.is_some() {
            warn!(email = %email, "Registration rejected, email already registered");
            return Err(AppError::AlreadyExists("User already exists".to_string()));
        }

        let password_hash = self.password_hasher.hash(&password).await?;
        let user = UserModel::new(name, email, password_hash);
        self.repository.create_user(&user).await?;

        info!(user_id = %user.id, "User registered successfully");
        Ok(user.id)
    }

    /// Authenticates a user by email and password
    ///
    /// Unknown email and wrong password fail with the same error.
    #[instrument(skip_all)]
    pub async fn login(&self, request: LoginRequest) -> Result<UserResponse, AppError> {
        let (email, password) = match (present(request.email), present_secret(request.password)) {
            (Some(email), Some(password)) => (email, password),
            (email, password) => {
                let mut missing = Vec::new();
                if email.is_none() {
                    missing.push("email");
                }
                if password.is_none() {
                    missing.push("password");
                }
                return Err(AppError::MissingFields(missing));
            }
        };

        info!(email = %email, "Login attempt");

        let user = match self.repository.find_user_by_email(&email).await? {
            Some(user) => user,
            None => {
                // Spend a hash so an unknown email costs about as much as a wrong password
                let _ = self.password_hasher.hash(&password).await;
                debug!(email = %email, "Login failed, no such user");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !self
            .password_hasher
            .verify(&password, &user.password_hash)
            .await?
        {
            debug!(email = %email, "Login failed, password mismatch");
            return Err(AppError::InvalidCredentials);
        }

        info!(user_id = %user.id, "Login successful");
        Ok(user.into())
    }
}
