// Public API - what other modules can use
pub use handlers::{login, register};
pub use password::{Argon2Hasher, PasswordHasher};

// Internal modules
mod handlers;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod types;
