//! Error types for the record service

use thiserror::Error;

use crate::userdb::UserError;

/// Errors surfaced to callers of the record service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinationError {
    /// Missing or malformed input, rejected before reaching the store
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Email already belongs to another record
    #[error("Email already registered: {0}")]
    Conflict(String),

    /// Resource not found with context
    #[error("{resource_type} not found: {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    /// A listing found nothing at all
    #[error("{0} not found")]
    EmptyCollection(String),

    /// The durable medium failed; not retried
    #[error("Database error: {0}")]
    Database(String),
}

impl CoordinationError {
    /// Stable machine-readable category
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Conflict(_) => "email_conflict",
            Self::ResourceNotFound { .. } | Self::EmptyCollection(_) => "not_found",
            Self::Database(_) => "storage_error",
        }
    }

    /// Log the error and return self
    ///
    /// Client errors are logged at debug level; storage faults at error level.
    pub fn log(self) -> Self {
        match &self {
            Self::Database(msg) => tracing::error!("Database error: {}", msg),
            other => tracing::debug!(code = other.code(), "{}", other),
        }
        self
    }
}

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        let error = match err {
            UserError::NotFound(id) => Self::ResourceNotFound {
                resource_type: "User".to_string(),
                resource_id: id.to_string(),
            },
            UserError::UniquenessViolation { value, .. } => Self::Conflict(value),
            UserError::Storage(msg) => Self::Database(msg),
        };
        error.log()
    }
}
