use axum::Router;
use std::sync::Arc;

use meditation_timer::{
    create_router,
    session::repository::InMemorySessionRepository,
    user::{repository::InMemoryUserRepository, Argon2Hasher},
    AppState,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub user_repository: Arc<InMemoryUserRepository>,
    pub session_repository: Arc<InMemorySessionRepository>,
}

pub struct TestSetupBuilder {
    session_repository: Arc<InMemorySessionRepository>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            session_repository: Arc::new(InMemorySessionRepository::new()),
        }
    }

    pub fn with_session_repository(mut self, repo: InMemorySessionRepository) -> Self {
        self.session_repository = Arc::new(repo);
        self
    }

    pub fn build(self) -> TestSetup {
        let user_repository = Arc::new(InMemoryUserRepository::new());
        // Cheapest argon2 parameters; production uses the crate defaults
        let hasher = Arc::new(
            Argon2Hasher::with_params(8, 1, 1).expect("test hasher parameters should be valid"),
        );

        let state = AppState::new(
            user_repository.clone(),
            self.session_repository.clone(),
            hasher,
        );

        TestSetup {
            app: create_router(state),
            user_repository,
            session_repository: self.session_repository,
        }
    }
}
