//! Services module
//!
//! This module contains business logic services

pub mod question;
pub mod redis;
pub mod validation;

// Re-export commonly used services
pub use question::QuestionService;
pub use redis::RedisService;
pub use validation::{AcceptAll, AnswerPolicy, ValidationService};

use std::sync::Arc;
use tracing::{info, warn};
use crate::config::{Settings, StorageBackend};
use crate::state::{CursorBackend, MemoryBackend, QuestionCatalog, SessionKeys, SessionStateStore};
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub question_service: QuestionService,
    pub validation_service: ValidationService,
    pub store: SessionStateStore,
    pub catalog: Arc<QuestionCatalog>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory, connecting to the configured backend
    pub async fn new(settings: &Settings) -> Result<Self> {
        let backend: Arc<dyn CursorBackend> = match settings.redis.backend {
            StorageBackend::Redis => {
                info!(host = %settings.redis.host, port = settings.redis.port, "Connecting to Redis...");
                Arc::new(RedisService::new(settings.redis.clone()).await?)
            }
            StorageBackend::Memory => {
                warn!("Using in-memory session storage; progress is lost on restart and not shared between instances");
                Arc::new(MemoryBackend::new())
            }
        };

        Ok(Self::with_backend(settings, backend))
    }

    /// Build all services over an existing backend
    pub fn with_backend(settings: &Settings, backend: Arc<dyn CursorBackend>) -> Self {
        let catalog = Arc::new(QuestionCatalog::from_definitions(&settings.interview.questions));
        let store = SessionStateStore::new(backend, SessionKeys::new(settings.interview.key_namespace.clone()));

        let question_service = QuestionService::new(catalog.clone(), store.clone());
        let validation_service = ValidationService::new(
            catalog.clone(),
            store.clone(),
            settings.interview.session_ttl_seconds,
        );

        info!(
            questions = catalog.question_count(),
            backend = store.backend_name(),
            "Services initialized"
        );

        Self {
            question_service,
            validation_service,
            store,
            catalog,
        }
    }

    /// Health check for the session backend
    pub async fn health_check(&self) -> ServiceHealthStatus {
        let backend_error = self.store.ping().await.err().map(|e| e.to_string());

        ServiceHealthStatus {
            backend: self.store.backend_name(),
            backend_healthy: backend_error.is_none(),
            backend_error,
        }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub backend: &'static str,
    pub backend_healthy: bool,
    pub backend_error: Option<String>,
}

impl ServiceHealthStatus {
    /// Check if all critical services are healthy
    pub fn is_healthy(&self) -> bool {
        self.backend_healthy
    }

    /// Get list of unhealthy services
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if let Some(error) = &self.backend_error {
            issues.push(format!("{} backend unavailable: {}", self.backend, error));
        }

        issues
    }
}
