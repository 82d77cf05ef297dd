//! Interview Orchestrator
//!
//! An HTTP service that walks interview sessions through a fixed, ordered
//! question catalog. Each session's position is a cursor held in Redis; this
//! library provides the catalog, the session store, the question flow and
//! answer validation services, and the axum router exposing them.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{InterviewError, Result};

// Re-export main components for easy access
pub use handlers::{create_router, AppState};
pub use services::ServiceFactory;
pub use state::{QuestionCatalog, SessionStateStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
