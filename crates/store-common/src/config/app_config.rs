//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default)]
    pub pool: PoolSettings,
}

/// Per-family handle pool settings
#[derive(Debug, Clone, Deserialize)]
pub struct PoolSettings {
    /// Maximum parallel connections per family
    #[serde(default = "default_max_parallel_connections")]
    pub max_parallel_connections: usize,
    /// How long `acquire` waits for a free handle, in milliseconds
    #[serde(default = "default_acquire_timeout_ms")]
    pub acquire_timeout_ms: u64,
    /// Fail immediately instead of waiting when a family is exhausted
    #[serde(default)]
    pub fail_fast: bool,
    /// Attempts to rebuild a broken handle before quarantining its slot
    #[serde(default = "default_rebuild_attempts")]
    pub rebuild_attempts: u32,
    #[serde(default = "default_rebuild_backoff_ms")]
    pub rebuild_backoff_ms: u64,
}

impl PoolSettings {
    #[must_use]
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.acquire_timeout_ms)
    }

    #[must_use]
    pub fn rebuild_backoff(&self) -> Duration {
        Duration::from_millis(self.rebuild_backoff_ms)
    }
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_parallel_connections: default_max_parallel_connections(),
            acquire_timeout_ms: default_acquire_timeout_ms(),
            fail_fast: false,
            rebuild_attempts: default_rebuild_attempts(),
            rebuild_backoff_ms: default_rebuild_backoff_ms(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "store-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_parallel_connections() -> usize {
    4
}

fn default_acquire_timeout_ms() -> u64 {
    5000
}

fn default_rebuild_attempts() -> u32 {
    3
}

fn default_rebuild_backoff_ms() -> u64 {
    250
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pool = PoolSettings {
            max_parallel_connections: parse_or(
                &lookup,
                "POOL_MAX_PARALLEL_CONNECTIONS",
                default_max_parallel_connections(),
            )?,
            acquire_timeout_ms: parse_or(
                &lookup,
                "POOL_ACQUIRE_TIMEOUT_MS",
                default_acquire_timeout_ms(),
            )?,
            fail_fast: parse_or(&lookup, "POOL_FAIL_FAST", false)?,
            rebuild_attempts: parse_or(&lookup, "POOL_REBUILD_ATTEMPTS", default_rebuild_attempts())?,
            rebuild_backoff_ms: parse_or(
                &lookup,
                "POOL_REBUILD_BACKOFF_MS",
                default_rebuild_backoff_ms(),
            )?,
        };

        if pool.max_parallel_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "POOL_MAX_PARALLEL_CONNECTIONS",
                "must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                pool,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_defaults_applied() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/store")]))
                .unwrap();
        assert_eq!(config.app.name, "store-server");
        assert!(config.app.env.is_development());
        assert_eq!(config.database.pool.max_parallel_connections, 4);
        assert_eq!(config.database.pool.acquire_timeout(), Duration::from_secs(5));
        assert!(!config.database.pool.fail_fast);
        assert_eq!(config.database.pool.rebuild_attempts, 3);
    }

    #[test]
    fn test_pool_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/store"),
            ("APP_ENV", "Production"),
            ("POOL_MAX_PARALLEL_CONNECTIONS", "8"),
            ("POOL_ACQUIRE_TIMEOUT_MS", "0"),
            ("POOL_FAIL_FAST", "true"),
        ]))
        .unwrap();
        assert!(config.app.env.is_production());
        assert_eq!(config.database.pool.max_parallel_connections, 8);
        assert_eq!(config.database.pool.acquire_timeout(), Duration::ZERO);
        assert!(config.database.pool.fail_fast);
    }

    #[test]
    fn test_missing_database_url() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/store"),
            ("POOL_MAX_PARALLEL_CONNECTIONS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue("POOL_MAX_PARALLEL_CONNECTIONS", _)
        ));
    }

    #[test]
    fn test_malformed_value_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/store"),
            ("POOL_FAIL_FAST", "sometimes"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("POOL_FAIL_FAST", _)));
    }
}
