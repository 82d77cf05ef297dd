//! State management module
//!
//! This module holds the question catalog and per-session progress

pub mod catalog;
pub mod keys;
pub mod memory;
pub mod storage;

// Re-export commonly used state components
pub use catalog::QuestionCatalog;
pub use keys::SessionKeys;
pub use memory::MemoryBackend;
pub use storage::{CursorBackend, SessionStateStore};
