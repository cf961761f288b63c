// Public API - what other modules can use
pub use handlers::{create_session, list_sessions};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod timestamp;
pub mod types;
