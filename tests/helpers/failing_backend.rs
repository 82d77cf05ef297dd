//! Backends simulating an unreachable key-value store

use async_trait::async_trait;
use interview_orchestrator::state::CursorBackend;
use interview_orchestrator::{InterviewError, Result};

/// Backend whose every call fails as if Redis were down
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingBackend;

fn unavailable<T>() -> Result<T> {
    Err(InterviewError::ServiceUnavailable("connection refused".to_string()))
}

#[async_trait]
impl CursorBackend for FailingBackend {
    async fn get(&self, _key: &str) -> Result<Option<u64>> {
        unavailable()
    }

    async fn set(&self, _key: &str, _value: u64, _ttl_seconds: Option<u64>) -> Result<()> {
        unavailable()
    }

    async fn claim(&self, _key: &str, _limit: u64) -> Result<u64> {
        unavailable()
    }

    async fn increment(&self, _key: &str, _ttl_seconds: Option<u64>) -> Result<u64> {
        unavailable()
    }

    async fn expire(&self, _key: &str, _ttl_seconds: u64) -> Result<bool> {
        unavailable()
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        unavailable()
    }

    async fn ping(&self) -> Result<()> {
        unavailable()
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
