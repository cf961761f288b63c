use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::UserModel;
use crate::shared::AppError;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepository {
    /// Inserts a user. Fails with `AlreadyExists` when the email is taken,
    /// independently of any check the caller did beforehand.
    async fn create_user(&self, user: &UserModel) -> Result<(), AppError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError>;
}

/// In-memory implementation of UserRepository for development and testing
///
/// Users are keyed by email, so the uniqueness check and the insert happen
/// under the same lock.
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, UserModel>>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the current number of users in the repository
    pub fn user_count(&self) -> usize {
        self.users.lock().map(|users| users.len()).unwrap_or(0)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self, user))]
    async fn create_user(&self, user: &UserModel) -> Result<(), AppError> {
        debug!(user_id = %user.id, email = %user.email, "Creating user in memory");

        let mut users = self.users.lock().map_err(|_| AppError::Internal)?;
        if users.contains_key(&user.email) {
            warn!(email = %user.email, "User with this email already exists in memory");
            return Err(AppError::AlreadyExists("User already exists".to_string()));
        }
        users.insert(user.email.clone(), user.clone());

        debug!(user_id = %user.id, "User created successfully in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        debug!(email = %email, "Fetching user from memory");

        let users = self.users.lock().map_err(|_| AppError::Internal)?;
        let user = users.get(email).cloned();

        match &user {
            Some(u) => debug!(email = %email, user_id = %u.id, "User found in memory"),
            None => debug!(email = %email, "User not found in memory"),
        }

        Ok(user)
    }
}

/// PostgreSQL implementation of user repository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    #[instrument(skip(self, user))]
    async fn create_user(&self, user: &UserModel) -> Result<(), AppError> {
        debug!(user_id = %user.id, email = %user.email, "Creating user in database");

        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                warn!(email = %user.email, "Email uniqueness constraint rejected insert");
                AppError::AlreadyExists("User already exists".to_string())
            }
            other => {
                warn!(error = %other, "Failed to create user in database");
                AppError::DatabaseError(other.to_string())
            }
        })?;

        debug!(user_id = %user.id, "User created successfully in database");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        debug!(email = %email, "Fetching user from database");

        let user = sqlx::query_as::<_, UserModel>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, email = %email, "Failed to fetch user from database");
            AppError::DatabaseError(e.to_string())
        })?;

        match &user {
            Some(u) => debug!(email = %email, user_id = %u.id, "User found in database"),
            None => debug!(email = %email, "User not found in database"),
        }

        Ok(user)
    }
}
