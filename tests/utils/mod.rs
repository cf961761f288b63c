pub mod actions;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use actions::{get, history, login, post_json, register, save_session, ApiResponse};
pub use setup::TestSetupBuilder;
