//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use store_common::AppError;
use store_core::error::DomainError;
use store_core::Family;

use crate::pool::PoolError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return a conflict, or fall back to a database error
pub fn map_unique_violation(e: SqlxError, family: Family) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::Conflict(format!("{family} name already in use"));
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Convert a pool failure into a DomainError
pub fn map_pool_error(e: PoolError) -> DomainError {
    match e {
        PoolError::Exhausted { family, .. } | PoolError::Closed { family } => {
            DomainError::PoolUnavailable {
                family,
                reason: e.to_string(),
            }
        }
        other => DomainError::InternalError(other.to_string()),
    }
}

impl From<PoolError> for AppError {
    fn from(e: PoolError) -> Self {
        if e.is_unavailable() {
            Self::ServiceUnavailable(e.to_string())
        } else {
            Self::Internal(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_exhaustion_maps_to_unavailable() {
        let err = map_pool_error(PoolError::Exhausted {
            family: Family::Discounts,
            waited: Duration::from_millis(5),
        });
        assert!(err.is_unavailable());

        let app = AppError::from(PoolError::Closed {
            family: Family::Users,
        });
        assert_eq!(app.status_code(), 503);
    }

    #[test]
    fn test_protocol_violation_maps_to_internal() {
        let err = map_pool_error(PoolError::ForeignHandle {
            family: Family::Sales,
        });
        assert_eq!(err.code(), "INTERNAL_ERROR");

        let app = AppError::from(PoolError::InvalidConfig("capacity".to_string()));
        assert_eq!(app.status_code(), 500);
    }

    #[test]
    fn test_non_unique_db_error() {
        let err = map_unique_violation(SqlxError::RowNotFound, Family::Products);
        assert_eq!(err.code(), "DATABASE_ERROR");
    }
}
