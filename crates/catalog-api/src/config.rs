//! # Application Configuration
//!
//! Environment profiles (`development`, `testing`, `production`), each
//! supplying the token signing key and debug/test flags.

use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Signing key used by `testing` so tokens are reproducible across runs
pub const TESTING_SECRET_KEY: &str = "test_secret_key";

const DEVELOPMENT_SECRET_KEY: &str = "dev-secret-key-change-me";

/// Configuration errors (fail fast at startup)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SECRET_KEY must be set in the production environment")]
    MissingSecretKey,

    #[error("Unknown environment: {0} (expected development, testing or production)")]
    UnknownEnvironment(String),

    #[error("Invalid socket address {0}")]
    InvalidAddress(String),
}

/// Deployment profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Testing => "testing",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "default" | "" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Selected profile
    pub environment: Environment,
    /// Process-wide token signing key
    pub secret_key: String,
    pub debug: bool,
    pub testing: bool,
    /// Optional partner registry path (overrides the default search paths)
    pub partners_file: Option<String>,
}

impl AppConfig {
    /// Load from environment variables (`ENVIRONMENT`, `SECRET_KEY`, `HOST`,
    /// `PORT`, `PARTNERS_FILE`), reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment: Environment = env::var("ENVIRONMENT")
            .unwrap_or_default()
            .parse()?;

        let mut config = Self::for_environment(environment, env::var("SECRET_KEY").ok())?;

        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }
        if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            config.port = port;
        }
        config.partners_file = env::var("PARTNERS_FILE").ok();

        Ok(config)
    }

    /// Build the profile for `environment`.
    ///
    /// `secret_key` is the externally supplied key, if any. Production
    /// refuses to start without one; testing always uses a fixed key.
    pub fn for_environment(
        environment: Environment,
        secret_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let secret_key = secret_key.filter(|k| !k.is_empty());

        match environment {
            Environment::Development => Ok(Self::base(
                environment,
                secret_key.unwrap_or_else(|| DEVELOPMENT_SECRET_KEY.to_string()),
                true,
                false,
            )),
            Environment::Testing => Ok(Self::testing()),
            Environment::Production => {
                let secret_key = secret_key.ok_or(ConfigError::MissingSecretKey)?;
                Ok(Self::base(environment, secret_key, false, false))
            }
        }
    }

    /// The `testing` profile with default host and port
    pub fn testing() -> Self {
        Self::base(Environment::Testing, TESTING_SECRET_KEY.to_string(), false, true)
    }

    fn base(environment: Environment, secret_key: String, debug: bool, testing: bool) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5001,
            environment,
            secret_key,
            debug,
            testing,
            partners_file: None,
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<std::net::SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("secret_key", &"<redacted>")
            .field("debug", &self.debug)
            .field("testing", &self.testing)
            .field("partners_file", &self.partners_file)
            .finish()
    }
}
