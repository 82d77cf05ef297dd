//! Test context for unified test setup
//!
//! This module provides a test context wiring the services over an
//! in-memory backend that tests can inspect directly.

use std::sync::Arc;
use axum::Router;
use interview_orchestrator::config::Settings;
use interview_orchestrator::services::{QuestionService, ValidationService};
use interview_orchestrator::state::{CursorBackend, MemoryBackend, SessionStateStore};
use interview_orchestrator::{create_router, AppState, ServiceFactory};

use super::{cursor_key, test_settings, FailingBackend};

/// Unified test context that manages all test components
pub struct TestContext {
    pub backend: MemoryBackend,
    pub services: ServiceFactory,
    pub settings: Settings,
}

impl TestContext {
    /// Create a new test context over a fresh in-memory backend
    pub fn new() -> Self {
        Self::with_settings(test_settings())
    }

    /// Create a test context with custom settings
    pub fn with_settings(settings: Settings) -> Self {
        // Initialize logging once
        let _ = tracing_subscriber::fmt::try_init();

        let backend = MemoryBackend::new();
        let services = ServiceFactory::with_backend(&settings, Arc::new(backend.clone()));

        Self {
            backend,
            services,
            settings,
        }
    }

    pub fn questions(&self) -> &QuestionService {
        &self.services.question_service
    }

    pub fn validation(&self) -> &ValidationService {
        &self.services.validation_service
    }

    pub fn store(&self) -> &SessionStateStore {
        &self.services.store
    }

    /// Raw cursor stored for a session, bypassing the services
    pub fn stored_cursor(&self, session_id: &str) -> Option<u64> {
        self.backend.raw_value(&cursor_key(session_id))
    }

    /// Router over this context's services
    pub fn router(&self) -> Router {
        create_router(AppState::new(self.services.clone(), self.settings.clone()))
    }
}

/// Services wired to a backend that always fails
pub fn unreachable_services() -> ServiceFactory {
    let backend: Arc<dyn CursorBackend> = Arc::new(FailingBackend);
    ServiceFactory::with_backend(&test_settings(), backend)
}
