//! Session state storage
//!
//! This module defines the contract a key-value backend must fulfil to hold
//! session cursors, and [`SessionStateStore`], the only reader and writer of
//! those cursors. Every store operation has a `try_*` form that surfaces
//! backend failures, and a degrading form used by the engines: reads fall back
//! to `0` and writes report `false`, so a backend outage restarts a session
//! instead of failing the request.

use std::sync::Arc;
use async_trait::async_trait;
use tracing::debug;
use crate::utils::errors::Result;
use crate::utils::logging::log_backend_failure;
use super::keys::SessionKeys;

/// Key-value backend holding numeric cursors
///
/// `claim` and `increment` must be atomic with respect to concurrent callers
/// on the same key.
#[async_trait]
pub trait CursorBackend: Send + Sync {
    /// Read a cursor; `Ok(None)` when the key is absent or expired
    async fn get(&self, key: &str) -> Result<Option<u64>>;

    /// Store a cursor. `Some(ttl)` (re)applies an expiration, `None` keeps the current one
    async fn set(&self, key: &str, value: u64, ttl_seconds: Option<u64>) -> Result<()>;

    /// Read the cursor (absent reads as 0) and store `value + 1` when it is
    /// still below `limit`, keeping the current expiration. Returns the value read.
    async fn claim(&self, key: &str, limit: u64) -> Result<u64>;

    /// Add one to the cursor (absent counts as 0) and optionally (re)apply an
    /// expiration. Returns the new value.
    async fn increment(&self, key: &str, ttl_seconds: Option<u64>) -> Result<u64>;

    /// Apply an expiration to an existing key; `false` when the key is absent
    async fn expire(&self, key: &str, ttl_seconds: u64) -> Result<bool>;

    /// Remove a key; `false` when it did not exist
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Check the backend is reachable
    async fn ping(&self) -> Result<()>;

    /// Short backend name for logs and health output
    fn name(&self) -> &'static str;
}

/// Reader and writer of per-session question cursors
#[derive(Clone)]
pub struct SessionStateStore {
    backend: Arc<dyn CursorBackend>,
    keys: SessionKeys,
}

impl SessionStateStore {
    /// Create a new session state store over a backend
    pub fn new(backend: Arc<dyn CursorBackend>, keys: SessionKeys) -> Self {
        Self { backend, keys }
    }

    /// Read the cursor, distinguishing absent (`Ok(None)`) from backend failure
    pub async fn try_read_cursor(&self, session_id: &str) -> Result<Option<u64>> {
        let key = self.keys.cursor_key(session_id);
        let cursor = self.backend.get(&key).await?;
        debug!(session_id = session_id, key = %key, cursor = ?cursor, "Cursor read");
        Ok(cursor)
    }

    /// Read the cursor; absent and unreachable both read as 0
    pub async fn read_cursor(&self, session_id: &str) -> u64 {
        match self.try_read_cursor(session_id).await {
            Ok(cursor) => cursor.unwrap_or(0),
            Err(e) => {
                log_backend_failure("read_cursor", session_id, &e);
                0
            }
        }
    }

    /// Persist the cursor, surfacing backend failures
    pub async fn try_write_cursor(&self, session_id: &str, value: u64, ttl_seconds: Option<u64>) -> Result<()> {
        let key = self.keys.cursor_key(session_id);
        self.backend.set(&key, value, ttl_seconds).await?;
        debug!(session_id = session_id, key = %key, cursor = value, ttl = ?ttl_seconds, "Cursor written");
        Ok(())
    }

    /// Persist the cursor; returns `false` if the backend failed
    pub async fn write_cursor(&self, session_id: &str, value: u64, ttl_seconds: Option<u64>) -> bool {
        match self.try_write_cursor(session_id, value, ttl_seconds).await {
            Ok(()) => true,
            Err(e) => {
                log_backend_failure("write_cursor", session_id, &e);
                false
            }
        }
    }

    /// Atomically take the current cursor and move past it while it is
    /// below the terminal position `catalog_len - 1`
    pub async fn try_claim_next(&self, session_id: &str, catalog_len: usize) -> Result<u64> {
        let key = self.keys.cursor_key(session_id);
        let cursor = self.backend.claim(&key, catalog_len as u64).await?;
        debug!(session_id = session_id, key = %key, cursor = cursor, "Cursor claimed");
        Ok(cursor)
    }

    /// Degrading form of [`Self::try_claim_next`]; serves the first question on failure
    pub async fn claim_next(&self, session_id: &str, catalog_len: usize) -> u64 {
        match self.try_claim_next(session_id, catalog_len).await {
            Ok(cursor) => cursor,
            Err(e) => {
                log_backend_failure("claim_next", session_id, &e);
                0
            }
        }
    }

    /// Atomically advance the cursor by one, returning the new value
    pub async fn try_advance(&self, session_id: &str, ttl_seconds: Option<u64>) -> Result<u64> {
        let key = self.keys.cursor_key(session_id);
        let cursor = self.backend.increment(&key, ttl_seconds).await?;
        debug!(session_id = session_id, key = %key, cursor = cursor, ttl = ?ttl_seconds, "Cursor advanced");
        Ok(cursor)
    }

    /// Degrading form of [`Self::try_advance`]; `None` if the backend failed
    pub async fn advance(&self, session_id: &str, ttl_seconds: Option<u64>) -> Option<u64> {
        match self.try_advance(session_id, ttl_seconds).await {
            Ok(cursor) => Some(cursor),
            Err(e) => {
                log_backend_failure("advance", session_id, &e);
                None
            }
        }
    }

    /// Re-apply the retention window without moving the cursor
    pub async fn refresh_ttl(&self, session_id: &str, ttl_seconds: u64) -> bool {
        let key = self.keys.cursor_key(session_id);
        match self.backend.expire(&key, ttl_seconds).await {
            Ok(applied) => applied,
            Err(e) => {
                log_backend_failure("refresh_ttl", session_id, &e);
                false
            }
        }
    }

    /// Forget a session's progress; `true` if a cursor was removed
    pub async fn reset_session(&self, session_id: &str) -> Result<bool> {
        let key = self.keys.cursor_key(session_id);
        let deleted = self.backend.delete(&key).await?;
        debug!(session_id = session_id, key = %key, deleted = deleted, "Session reset");
        Ok(deleted)
    }

    /// Check the backend is reachable
    pub async fn ping(&self) -> Result<()> {
        self.backend.ping().await
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
}

impl std::fmt::Debug for SessionStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStateStore")
            .field("backend", &self.backend.name())
            .field("keys", &self.keys)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::memory::MemoryBackend;

    fn create_test_store() -> (SessionStateStore, MemoryBackend) {
        let backend = MemoryBackend::new();
        let store = SessionStateStore::new(Arc::new(backend.clone()), SessionKeys::default());
        (store, backend)
    }

    #[tokio::test]
    async fn test_absent_cursor_reads_as_zero() {
        let (store, _) = create_test_store();

        assert_eq!(store.try_read_cursor("fresh").await.unwrap(), None);
        assert_eq!(store.read_cursor("fresh").await, 0);
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let (store, backend) = create_test_store();

        assert!(store.write_cursor("s1", 2, None).await);
        assert_eq!(store.read_cursor("s1").await, 2);
        assert_eq!(backend.raw_value("interview:s1:question:idx"), Some(2));
    }

    #[tokio::test]
    async fn test_claim_stops_at_terminal_position() {
        let (store, _) = create_test_store();

        assert_eq!(store.claim_next("s1", 3).await, 0);
        assert_eq!(store.claim_next("s1", 3).await, 1);
        assert_eq!(store.claim_next("s1", 3).await, 2);
        assert_eq!(store.claim_next("s1", 3).await, 2);
        assert_eq!(store.read_cursor("s1").await, 2);
    }

    #[tokio::test]
    async fn test_advance_returns_new_value() {
        let (store, _) = create_test_store();

        assert_eq!(store.advance("s2", Some(60)).await, Some(1));
        assert_eq!(store.advance("s2", Some(60)).await, Some(2));
    }

    #[tokio::test]
    async fn test_refresh_ttl_on_absent_session() {
        let (store, _) = create_test_store();

        assert!(!store.refresh_ttl("nobody", 60).await);
    }

    #[tokio::test]
    async fn test_reset_session() {
        let (store, _) = create_test_store();

        store.write_cursor("s3", 1, None).await;
        assert!(store.reset_session("s3").await.unwrap());
        assert!(!store.reset_session("s3").await.unwrap());
        assert_eq!(store.read_cursor("s3").await, 0);
    }

    #[test]
    fn test_debug_hides_backend_internals() {
        let (store, _) = create_test_store();
        let rendered = format!("{:?}", store);

        assert!(rendered.contains("memory"));
        assert!(rendered.contains("interview"));
    }
}
