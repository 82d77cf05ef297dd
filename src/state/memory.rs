//! In-process cursor backend
//!
//! Keeps cursors in a mutex-guarded map with expirations measured on tokio's
//! clock, so paused-time tests can fast-forward past a TTL. Used when the
//! service runs with `redis.backend = "memory"` and throughout the tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;
use tokio::time::Instant;
use crate::utils::errors::{InterviewError, Result};
use super::storage::CursorBackend;

#[derive(Debug, Clone, Copy)]
struct MemoryEntry {
    value: u64,
    expires_at: Option<Instant>,
}

impl MemoryEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Process-local cursor backend
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, MemoryEntry>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the live entry for `key`, dropping it first if it has expired
    fn with_entry<T>(&self, key: &str, f: impl FnOnce(&mut HashMap<String, MemoryEntry>, Instant) -> T) -> Result<T> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| InterviewError::ServiceUnavailable("memory backend lock poisoned".to_string()))?;

        let now = Instant::now();
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
        }

        Ok(f(&mut entries, now))
    }

    /// Drop every expired entry; writes call this so abandoned sessions are freed
    fn purge_expired(entries: &mut HashMap<String, MemoryEntry>, now: Instant) {
        entries.retain(|_, entry| !entry.is_expired(now));
    }

    /// Current value of a key, ignoring expired entries
    pub fn raw_value(&self, key: &str) -> Option<u64> {
        self.with_entry(key, |entries, _| entries.get(key).map(|entry| entry.value))
            .ok()
            .flatten()
    }

    /// Time left before a key expires; `None` when absent or without expiration
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        self.with_entry(key, |entries, now| {
            entries
                .get(key)
                .and_then(|entry| entry.expires_at)
                .map(|at| at.saturating_duration_since(now))
        })
        .ok()
        .flatten()
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .map(|entries| entries.values().filter(|entry| !entry.is_expired(now)).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CursorBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<u64>> {
        self.with_entry(key, |entries, _| entries.get(key).map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: u64, ttl_seconds: Option<u64>) -> Result<()> {
        self.with_entry(key, |entries, now| {
            Self::purge_expired(entries, now);
            let kept = entries.get(key).and_then(|entry| entry.expires_at);
            let expires_at = match ttl_seconds {
                Some(ttl) => Some(now + Duration::from_secs(ttl)),
                None => kept,
            };
            entries.insert(key.to_string(), MemoryEntry { value, expires_at });
        })
    }

    async fn claim(&self, key: &str, limit: u64) -> Result<u64> {
        self.with_entry(key, |entries, now| {
            Self::purge_expired(entries, now);
            let current = entries.get(key).map(|entry| entry.value).unwrap_or(0);
            if current.saturating_add(1) < limit {
                let expires_at = entries.get(key).and_then(|entry| entry.expires_at);
                entries.insert(key.to_string(), MemoryEntry { value: current + 1, expires_at });
            }
            current
        })
    }

    async fn increment(&self, key: &str, ttl_seconds: Option<u64>) -> Result<u64> {
        self.with_entry(key, |entries, now| {
            Self::purge_expired(entries, now);
            let entry = entries
                .entry(key.to_string())
                .or_insert(MemoryEntry { value: 0, expires_at: None });
            entry.value = entry.value.saturating_add(1);
            if let Some(ttl) = ttl_seconds {
                entry.expires_at = Some(now + Duration::from_secs(ttl));
            }
            entry.value
        })
    }

    async fn expire(&self, key: &str, ttl_seconds: u64) -> Result<bool> {
        self.with_entry(key, |entries, now| match entries.get_mut(key) {
            Some(entry) => {
                entry.expires_at = Some(now + Duration::from_secs(ttl_seconds));
                true
            }
            None => false,
        })
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        self.with_entry(key, |entries, _| entries.remove(key).is_some())
    }

    async fn ping(&self) -> Result<()> {
        self.with_entry("", |_, _| ())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
