//! Pool error types

use std::time::Duration;

use store_core::Family;

/// Errors returned by pool acquisition, release and construction
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// A handle could not be built while constructing the pools
    #[error("Failed to initialize {family} pool at slot {slot}: {source}")]
    Initialization {
        family: Family,
        slot: usize,
        #[source]
        source: anyhow::Error,
    },

    /// No handle became available within the allowed wait
    #[error("{family} pool exhausted (waited {waited:?})")]
    Exhausted { family: Family, waited: Duration },

    /// The pool has been shut down
    #[error("{family} pool is closed")]
    Closed { family: Family },

    /// The handle's slot is not currently checked out
    #[error("{family} handle for slot {slot} is not checked out")]
    DoubleRelease { family: Family, slot: usize },

    /// The handle was not obtained from this pool
    #[error("Handle does not belong to this {family} pool")]
    ForeignHandle { family: Family },

    #[error("Invalid pool configuration: {0}")]
    InvalidConfig(String),
}

impl PoolError {
    /// The family this error concerns, if any
    #[must_use]
    pub fn family(&self) -> Option<Family> {
        match self {
            Self::Initialization { family, .. }
            | Self::Exhausted { family, .. }
            | Self::Closed { family }
            | Self::DoubleRelease { family, .. }
            | Self::ForeignHandle { family } => Some(*family),
            Self::InvalidConfig(_) => None,
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }

    /// A release that violated the checkout protocol
    #[must_use]
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Self::DoubleRelease { .. } | Self::ForeignHandle { .. })
    }

    /// Transient unavailability the caller may surface as "try again later"
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Exhausted { .. } | Self::Closed { .. })
    }
}

/// Result type for pool operations
pub type PoolResult<T> = Result<T, PoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let exhausted = PoolError::Exhausted {
            family: Family::Sales,
            waited: Duration::ZERO,
        };
        assert!(exhausted.is_exhausted());
        assert!(exhausted.is_unavailable());
        assert!(!exhausted.is_protocol_violation());
        assert_eq!(exhausted.family(), Some(Family::Sales));

        let double = PoolError::DoubleRelease {
            family: Family::Users,
            slot: 2,
        };
        assert!(double.is_protocol_violation());
        assert_eq!(
            double.to_string(),
            "users handle for slot 2 is not checked out"
        );

        assert_eq!(PoolError::InvalidConfig("x".to_string()).family(), None);
    }

    #[test]
    fn test_initialization_source() {
        use std::error::Error as _;

        let err = PoolError::Initialization {
            family: Family::Informs,
            slot: 0,
            source: anyhow::anyhow!("connection refused"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("connection refused"));
    }
}
