use thiserror::Error;

use crate::storage::StorageError;

#[derive(Clone, Error, Debug)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(i64),

    /// A write would give two live records the same value for a unique field
    #[error("Uniqueness violation on {field}: {value}")]
    UniquenessViolation { field: &'static str, value: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for UserError {
    fn from(err: StorageError) -> Self {
        UserError::Storage(err.to_string())
    }
}

impl UserError {
    /// Classify a failed write: unique-key conflicts on `email` become
    /// `UniquenessViolation`, anything else is a storage fault.
    pub(crate) fn from_write(err: sqlx::Error, email: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                UserError::UniquenessViolation {
                    field: "email",
                    value: email.to_string(),
                }
            }
            _ => UserError::Storage(err.to_string()),
        }
    }
}
