use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted user record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier, never reused within a store
    pub id: i64,
    /// Display name, no format constraint
    pub name: String,
    /// Unique among currently existing records
    pub email: String,
}

/// Request body for create and update; both fields are always replaced together
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
