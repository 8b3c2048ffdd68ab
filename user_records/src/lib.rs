//! user_records - persistence and consistency layer for user records
//!
//! This crate owns a single collection of user records (`id`, `name`, `email`)
//! in SQLite or PostgreSQL, assigns ids that are never reused, keeps `email`
//! unique among live records, and exposes a small service layer that
//! validates input and maps store outcomes to typed errors.

mod coordination;
mod storage;
mod userdb;

#[cfg(test)]
mod test_utils;

pub use coordination::{
    CoordinationError, DeleteConfirmation, create_user, delete_user, get_user, list_users,
    update_user,
};

pub use storage::{DataStore, DataStoreConfig, StorageError, StoreType};

pub use userdb::{User, UserError, UserInput, UserStore};

/// Connect to the store described by the environment and prepare its tables
pub async fn init() -> Result<UserStore, UserError> {
    let config = DataStoreConfig::from_env()?;
    UserStore::connect(&config).await
}
