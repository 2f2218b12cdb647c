//! Pool configuration

use std::time::Duration;

use store_common::{DatabaseConfig, PoolSettings};

use super::error::{PoolError, PoolResult};

/// Backpressure behaviour of `acquire` on an exhausted family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireMode {
    /// Return `Exhausted` immediately
    FailFast,
    /// Wait up to the given duration. A zero duration behaves like `FailFast`.
    Wait(Duration),
}

impl AcquireMode {
    /// Wait bound, or `None` when the caller must not block
    #[must_use]
    pub fn timeout(self) -> Option<Duration> {
        match self {
            Self::FailFast => None,
            Self::Wait(timeout) if timeout.is_zero() => None,
            Self::Wait(timeout) => Some(timeout),
        }
    }
}

impl Default for AcquireMode {
    fn default() -> Self {
        Self::Wait(Duration::from_secs(5))
    }
}

/// Configuration shared by every family pool
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Handles per family (`N`)
    pub capacity: usize,
    /// Mode used by `acquire`/`checkout` when the caller does not pick one
    pub acquire_mode: AcquireMode,
    /// Attempts to rebuild a broken handle before quarantining its slot
    pub rebuild_attempts: u32,
    /// Delay before the second rebuild attempt; grows linearly after that
    pub rebuild_backoff: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: 4,
            acquire_mode: AcquireMode::default(),
            rebuild_attempts: 3,
            rebuild_backoff: Duration::from_millis(250),
        }
    }
}

impl PoolConfig {
    /// Config with the given capacity and defaults elsewhere
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> PoolResult<()> {
        if self.capacity == 0 {
            return Err(PoolError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.capacity > tokio::sync::Semaphore::MAX_PERMITS {
            return Err(PoolError::InvalidConfig(format!(
                "capacity {} exceeds the semaphore limit",
                self.capacity
            )));
        }
        Ok(())
    }
}

impl From<&PoolSettings> for PoolConfig {
    fn from(settings: &PoolSettings) -> Self {
        let acquire_mode = if settings.fail_fast {
            AcquireMode::FailFast
        } else {
            AcquireMode::Wait(settings.acquire_timeout())
        };

        Self {
            capacity: settings.max_parallel_connections,
            acquire_mode,
            rebuild_attempts: settings.rebuild_attempts,
            rebuild_backoff: settings.rebuild_backoff(),
        }
    }
}

impl From<&DatabaseConfig> for PoolConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self::from(&config.pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_wait_is_fail_fast() {
        assert_eq!(AcquireMode::Wait(Duration::ZERO).timeout(), None);
        assert_eq!(AcquireMode::FailFast.timeout(), None);
        assert_eq!(
            AcquireMode::Wait(Duration::from_millis(10)).timeout(),
            Some(Duration::from_millis(10))
        );
    }

    #[test]
    fn test_validate() {
        assert!(PoolConfig::default().validate().is_ok());
        assert!(matches!(
            PoolConfig::with_capacity(0).validate(),
            Err(PoolError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_settings() {
        let settings = PoolSettings {
            max_parallel_connections: 3,
            acquire_timeout_ms: 1500,
            fail_fast: false,
            rebuild_attempts: 5,
            rebuild_backoff_ms: 100,
        };
        let config = PoolConfig::from(&settings);
        assert_eq!(config.capacity, 3);
        assert_eq!(
            config.acquire_mode,
            AcquireMode::Wait(Duration::from_millis(1500))
        );
        assert_eq!(config.rebuild_attempts, 5);
        assert_eq!(config.rebuild_backoff, Duration::from_millis(100));

        let fail_fast = PoolConfig::from(&PoolSettings {
            fail_fast: true,
            ..settings
        });
        assert_eq!(fail_fast.acquire_mode, AcquireMode::FailFast);
    }

    #[test]
    fn test_from_database_config() {
        let database = DatabaseConfig {
            url: "postgres://localhost/store".to_string(),
            pool: PoolSettings {
                max_parallel_connections: 6,
                fail_fast: true,
                ..PoolSettings::default()
            },
        };
        let config = PoolConfig::from(&database);
        assert_eq!(config.capacity, 6);
        assert_eq!(config.acquire_mode, AcquireMode::FailFast);
        assert!(config.validate().is_ok());
    }
}
