//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Family;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("No {family} record with id {id}")]
    NotFound { family: Family, id: i64 },

    #[error("No {family} record named {name:?}")]
    NameNotFound { family: Family, name: String },

    // =========================================================================
    // Validation / Conflict Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// No database handle could be obtained for the family
    #[error("{family} storage unavailable: {reason}")]
    PoolUnavailable { family: Family, reason: String },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } | Self::NameNotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::PoolUnavailable { .. } => "STORAGE_UNAVAILABLE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NameNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Check if the caller may retry later (backpressure from the pool)
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::PoolUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = DomainError::NotFound {
            family: Family::Products,
            id: 7,
        };
        assert_eq!(err.code(), "NOT_FOUND");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No products record with id 7");

        let err = DomainError::PoolUnavailable {
            family: Family::Sales,
            reason: "exhausted".to_string(),
        };
        assert!(err.is_unavailable());
        assert!(!err.is_conflict());
        assert_eq!(err.code(), "STORAGE_UNAVAILABLE");
    }
}
