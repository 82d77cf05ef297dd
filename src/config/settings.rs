//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from configuration files and environment variables.

use serde::{Deserialize, Serialize};
use crate::models::QuestionDefinition;

/// Default retention window for a session cursor after an answer is validated
pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 10800;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub redis: RedisConfig,
    pub interview: InterviewConfig,
    pub logging: LoggingConfig,
}

/// Project metadata
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub environment: Environment,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_prefix: String,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Address the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which backend holds session cursors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Redis,
    /// Process-local store, for development without a Redis server
    Memory,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisConfig {
    pub backend: StorageBackend,
    pub host: String,
    pub port: u16,
    pub db: u32,
    pub username: Option<String>,
    pub password: Option<String>,
    pub use_ssl: bool,
}

impl RedisConfig {
    /// Build the connection URL from its components
    pub fn connection_url(&self) -> String {
        let scheme = if self.use_ssl { "rediss" } else { "redis" };
        let auth = match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(password)) if !password.is_empty() => format!("{}:{}@", user, password),
            (None, Some(password)) if !password.is_empty() => format!(":{}@", password),
            _ => String::new(),
        };
        format!("{}://{}{}:{}/{}", scheme, auth, self.host, self.port, self.db)
    }
}

/// Interview progression configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InterviewConfig {
    /// Leading segment of every session key
    pub key_namespace: String,
    /// Expiration applied to a cursor whenever an answer is validated
    pub session_ttl_seconds: u64,
    /// Custom catalog; the built-in questions are used when empty
    #[serde(default)]
    pub questions: Vec<QuestionDefinition>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Directory for daily-rolling log files; stdout only when unset
    pub directory: Option<String>,
}

impl Settings {
    /// Load settings from defaults, an optional configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("INTERVIEW")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::InterviewError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppConfig {
                name: "Interview Orchestrator".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                environment: Environment::Development,
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                api_prefix: "/api/v1".to_string(),
                allowed_origins: vec![],
            },
            redis: RedisConfig {
                backend: StorageBackend::Redis,
                host: "localhost".to_string(),
                port: 6379,
                db: 0,
                username: None,
                password: None,
                use_ssl: false,
            },
            interview: InterviewConfig {
                key_namespace: "interview".to_string(),
                session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
                questions: vec![],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                json: false,
                directory: None,
            },
        }
    }
}
