// Library crate for the meditation timer server
// This file exposes the public API for integration tests

pub mod config;
pub mod routes;
pub mod session;
pub mod shared;
pub mod store;
pub mod user;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use routes::create_router;
pub use shared::{AppError, AppState};
