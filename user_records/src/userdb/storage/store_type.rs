use tokio::sync::RwLock;

use crate::storage::{DataStore, DataStoreConfig};
use crate::userdb::{errors::UserError, types::User};

use super::postgres::*;
use super::sqlite::*;

/// Owner of the user record collection.
///
/// Mutations hold the write side of `write_lock` for their whole transaction,
/// so conflicting inserts, updates and deletes are serialized inside this
/// process; reads share the read side and never see a half-applied write.
pub struct UserStore {
    data_store: Box<dyn DataStore>,
    write_lock: RwLock<()>,
}

impl UserStore {
    pub fn new(data_store: Box<dyn DataStore>) -> Self {
        Self {
            data_store,
            write_lock: RwLock::new(()),
        }
    }

    /// Open the configured database and make sure the users table is usable.
    ///
    /// Any error here means the durable medium is unreachable or has an
    /// incompatible schema; callers are expected to abort.
    pub async fn connect(config: &DataStoreConfig) -> Result<Self, UserError> {
        let store = Self::new(config.connect()?);
        store.init().await?;
        Ok(store)
    }

    /// Initialize the user database tables
    pub async fn init(&self) -> Result<(), UserError> {
        let _guard = self.write_lock.write().await;

        match (self.data_store.as_sqlite(), self.data_store.as_postgres()) {
            (Some(pool), _) => {
                create_tables_sqlite(pool).await?;
                validate_user_tables_sqlite(pool).await?;
            }
            (_, Some(pool)) => {
                create_tables_postgres(pool).await?;
                validate_user_tables_postgres(pool).await?;
            }
            _ => return Err(UserError::Storage("Unsupported database type".to_string())),
        }

        tracing::info!(store_type = %self.data_store.store_type(), "User store initialized");
        Ok(())
    }

    /// Persist a new record and return it with its freshly assigned id
    #[tracing::instrument(skip(self, name))]
    pub async fn insert_user(&self, name: &str, email: &str) -> Result<User, UserError> {
        let _guard = self.write_lock.write().await;

        let result = if let Some(pool) = self.data_store.as_sqlite() {
            insert_user_sqlite(pool, name, email).await
        } else if let Some(pool) = self.data_store.as_postgres() {
            insert_user_postgres(pool, name, email).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(user) => tracing::info!(user_id = user.id, "User inserted"),
            Err(UserError::UniquenessViolation { field, .. }) => {
                tracing::info!(field, "User insert rejected - duplicate value")
            }
            Err(e) => tracing::error!(error = %e, "User insert failed"),
        }

        result
    }

    /// Get a user by their ID
    #[tracing::instrument(skip(self), fields(user_id = id))]
    pub async fn get_user(&self, id: i64) -> Result<User, UserError> {
        let _guard = self.write_lock.read().await;

        let result = if let Some(pool) = self.data_store.as_sqlite() {
            get_user_sqlite(pool, id).await
        } else if let Some(pool) = self.data_store.as_postgres() {
            get_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match result {
            Ok(Some(user)) => {
                tracing::debug!(found = true, "User lookup completed");
                Ok(user)
            }
            Ok(None) => {
                tracing::debug!(found = false, "User lookup completed - not found");
                Err(UserError::NotFound(id))
            }
            Err(e) => {
                tracing::error!(error = %e, "User lookup failed");
                Err(e)
            }
        }
    }

    /// Every live record, ordered by id
    pub async fn get_all_users(&self) -> Result<Vec<User>, UserError> {
        let _guard = self.write_lock.read().await;

        if let Some(pool) = self.data_store.as_sqlite() {
            get_all_users_sqlite(pool).await
        } else if let Some(pool) = self.data_store.as_postgres() {
            get_all_users_postgres(pool).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Replace name and email of an existing record; the id is kept.
    ///
    /// Moving a record onto an email owned by another record is rejected
    /// with `UniquenessViolation`, same as on insert.
    #[tracing::instrument(skip(self, name), fields(user_id = id))]
    pub async fn update_user(&self, id: i64, name: &str, email: &str) -> Result<User, UserError> {
        let _guard = self.write_lock.write().await;

        let result = if let Some(pool) = self.data_store.as_sqlite() {
            update_user_sqlite(pool, id, name, email).await
        } else if let Some(pool) = self.data_store.as_postgres() {
            update_user_postgres(pool, id, name, email).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match result {
            Ok(Some(user)) => {
                tracing::info!("User updated");
                Ok(user)
            }
            Ok(None) => Err(UserError::NotFound(id)),
            Err(e) => {
                tracing::warn!(error = %e, "User update failed");
                Err(e)
            }
        }
    }

    #[tracing::instrument(skip(self), fields(user_id = id))]
    pub async fn delete_user(&self, id: i64) -> Result<(), UserError> {
        let _guard = self.write_lock.write().await;

        let deleted = if let Some(pool) = self.data_store.as_sqlite() {
            delete_user_sqlite(pool, id).await
        } else if let Some(pool) = self.data_store.as_postgres() {
            delete_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }?;

        if deleted {
            tracing::info!("User deleted");
            Ok(())
        } else {
            Err(UserError::NotFound(id))
        }
    }

    /// Close the underlying pool, waiting for checked-out connections
    pub async fn close(&self) {
        if let Some(pool) = self.data_store.as_sqlite() {
            pool.close().await;
        } else if let Some(pool) = self.data_store.as_postgres() {
            pool.close().await;
        }
    }
}
