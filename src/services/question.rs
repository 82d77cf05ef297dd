//! Question flow service
//!
//! Serves each session the next entry of the catalog and moves its cursor
//! forward. The read and the advance happen as one backend operation, so
//! concurrent requests for one session each receive a different question.

use std::sync::Arc;
use tracing::info;
use crate::models::QuestionEntry;
use crate::state::{QuestionCatalog, SessionStateStore};
use crate::utils::logging::log_session_progress;

/// Service handing out questions in catalog order
#[derive(Debug, Clone)]
pub struct QuestionService {
    catalog: Arc<QuestionCatalog>,
    store: SessionStateStore,
}

impl QuestionService {
    /// Create a new QuestionService instance
    pub fn new(catalog: Arc<QuestionCatalog>, store: SessionStateStore) -> Self {
        Self { catalog, store }
    }

    /// Next question for a session, or the end marker once the catalog is exhausted.
    ///
    /// A backend failure serves the first question again rather than failing.
    pub async fn next_question(&self, session_id: &str) -> QuestionEntry {
        let cursor = self.store.claim_next(session_id, self.catalog.len()).await;
        let entry = self.catalog.entry_at(cursor).clone();

        if entry.is_end() {
            info!(session_id = session_id, cursor = cursor, "Interview finished for session");
        } else {
            log_session_progress(session_id, "next_question", cursor, cursor + 1);
        }

        entry
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MemoryBackend, SessionKeys};

    fn create_test_service() -> QuestionService {
        let store = SessionStateStore::new(Arc::new(MemoryBackend::new()), SessionKeys::default());
        QuestionService::new(Arc::new(QuestionCatalog::builtin()), store)
    }

    #[tokio::test]
    async fn test_fresh_session_gets_first_question() {
        let service = create_test_service();

        let entry = service.next_question("new-session").await;
        assert_eq!(entry.prompt(), Some("Introduce yourself briefly please"));
    }

    #[tokio::test]
    async fn test_sessions_progress_independently() {
        let service = create_test_service();

        service.next_question("a").await;
        let second_for_a = service.next_question("a").await;
        let first_for_b = service.next_question("b").await;

        assert_eq!(second_for_a, *service.catalog().entry_at(1));
        assert_eq!(first_for_b, *service.catalog().entry_at(0));
    }
}
