//! Redis integration service implementation
//!
//! This service owns the Redis connection manager and exposes the small
//! key-value surface the orchestrator needs: get, set with optional expiry,
//! delete, exists, increment, expire and ping over string keys and values.
//! It also implements [`CursorBackend`], with the read-and-advance step run as
//! a server-side script so concurrent requests never lose an update.

use redis::{AsyncCommands, Script};
use tracing::{debug, warn};
use async_trait::async_trait;
use crate::config::RedisConfig;
use crate::state::CursorBackend;
use crate::utils::errors::{InterviewError, Result};

/// Returns the cursor it read and moves it forward while it is below ARGV[1] - 1.
/// KEEPTTL preserves an expiration applied by answer validation.
const CLAIM_SCRIPT: &str = r#"
local current = tonumber(redis.call('GET', KEYS[1])) or 0
if current + 1 < tonumber(ARGV[1]) then
    redis.call('SET', KEYS[1], current + 1, 'KEEPTTL')
end
return current
"#;

/// Redis service for session state
#[derive(Clone)]
pub struct RedisService {
    connection_manager: redis::aio::ConnectionManager,
    config: RedisConfig,
    claim_script: Script,
}

impl RedisService {
    /// Connect to Redis using the configured host, port and credentials
    pub async fn new(config: RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.connection_url())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        debug!(host = %config.host, port = config.port, db = config.db, "Redis connection established");
        Ok(Self {
            connection_manager,
            config,
            claim_script: Script::new(CLAIM_SCRIPT),
        })
    }

    /// Get a value from Redis
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection_manager.clone();
        let value: Option<String> = conn.get(key).await?;

        debug!(key = %key, found = value.is_some(), "Value retrieved from Redis");
        Ok(value)
    }

    /// Set a value; with `None` the key's current expiration is kept
    pub async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        match ttl_seconds {
            Some(ttl) => cmd.arg("EX").arg(ttl),
            None => cmd.arg("KEEPTTL"),
        };
        let _: () = cmd.query_async(&mut conn).await?;

        debug!(key = %key, ttl = ?ttl_seconds, "Value set in Redis");
        Ok(())
    }

    /// Delete a key from Redis
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection_manager.clone();
        let deleted: i64 = conn.del(key).await?;

        debug!(key = %key, deleted = deleted > 0, "Key deletion attempted");
        Ok(deleted > 0)
    }

    /// Check if a key exists in Redis
    pub async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection_manager.clone();
        let exists: bool = conn.exists(key).await?;

        debug!(key = %key, exists = exists, "Key existence check");
        Ok(exists)
    }

    /// Increment a counter, optionally (re)applying an expiration in the same transaction
    pub async fn increment(&self, key: &str, ttl_seconds: Option<u64>) -> Result<i64> {
        let mut conn = self.connection_manager.clone();
        let mut pipe = redis::pipe();
        pipe.atomic().cmd("INCR").arg(key);
        if let Some(ttl) = ttl_seconds {
            pipe.cmd("EXPIRE").arg(key).arg(ttl).ignore();
        }
        let (value,): (i64,) = pipe.query_async(&mut conn).await?;

        debug!(key = %key, value = value, ttl = ?ttl_seconds, "Counter incremented");
        Ok(value)
    }

    /// Set TTL for an existing key
    pub async fn expire(&self, key: &str, ttl_seconds: u64) -> Result<bool> {
        let mut conn = self.connection_manager.clone();
        let applied: bool = redis::cmd("EXPIRE").arg(key).arg(ttl_seconds).query_async(&mut conn).await?;

        debug!(key = %key, ttl = ttl_seconds, success = applied, "TTL set for key");
        Ok(applied)
    }

    /// Get TTL for a key; -2 when absent, -1 when it has no expiration
    pub async fn ttl(&self, key: &str) -> Result<i64> {
        let mut conn = self.connection_manager.clone();
        let ttl: i64 = conn.ttl(key).await?;

        debug!(key = %key, ttl = ttl, "TTL retrieved for key");
        Ok(ttl)
    }

    /// Health check for Redis connection
    pub async fn health_check(&self) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let response: String = redis::cmd("PING").query_async(&mut conn).await?;

        if response != "PONG" {
            warn!(response = %response, "Unexpected PING response");
            return Err(InterviewError::ServiceUnavailable(format!(
                "unexpected PING response: {}",
                response
            )));
        }
        Ok(())
    }

    fn parse_cursor(key: &str, raw: String) -> Result<u64> {
        raw.trim().parse::<u64>().map_err(|_| InterviewError::InvalidCursor {
            key: key.to_string(),
            value: raw,
        })
    }
}

#[async_trait]
impl CursorBackend for RedisService {
    async fn get(&self, key: &str) -> Result<Option<u64>> {
        RedisService::get(self, key)
            .await?
            .map(|raw| Self::parse_cursor(key, raw))
            .transpose()
    }

    async fn set(&self, key: &str, value: u64, ttl_seconds: Option<u64>) -> Result<()> {
        RedisService::set(self, key, &value.to_string(), ttl_seconds).await
    }

    async fn claim(&self, key: &str, limit: u64) -> Result<u64> {
        let mut conn = self.connection_manager.clone();
        let cursor: u64 = self
            .claim_script
            .key(key)
            .arg(limit)
            .invoke_async(&mut conn)
            .await?;

        debug!(key = %key, cursor = cursor, limit = limit, "Cursor claimed in Redis");
        Ok(cursor)
    }

    async fn increment(&self, key: &str, ttl_seconds: Option<u64>) -> Result<u64> {
        let value = RedisService::increment(self, key, ttl_seconds).await?;
        u64::try_from(value).map_err(|_| InterviewError::InvalidCursor {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    async fn expire(&self, key: &str, ttl_seconds: u64) -> Result<bool> {
        RedisService::expire(self, key, ttl_seconds).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        RedisService::delete(self, key).await
    }

    async fn ping(&self) -> Result<()> {
        self.health_check().await
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

impl std::fmt::Debug for RedisService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisService")
            .field("host", &self.config.host)
            .field("port", &self.config.port)
            .field("db", &self.config.db)
            .finish_non_exhaustive()
    }
}
