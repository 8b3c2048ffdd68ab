//! Data store connection configuration

use std::{env, str::FromStr};

use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::types::{DataStore, PostgresDataStore, SqliteDataStore, StoreType};
use crate::storage::errors::StorageError;

const ENV_STORE_TYPE: &str = "GENERIC_DATA_STORE_TYPE";
const ENV_STORE_URL: &str = "GENERIC_DATA_STORE_URL";
const ENV_MAX_CONNECTIONS: &str = "GENERIC_DATA_STORE_MAX_CONNECTIONS";

const DEFAULT_SQLITE_URL: &str = "sqlite:./users.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Where and how to reach the durable medium
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataStoreConfig {
    pub store_type: StoreType,
    pub url: String,
    pub max_connections: u32,
}

impl DataStoreConfig {
    pub fn new(store_type: StoreType, url: impl Into<String>) -> Self {
        Self {
            store_type,
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Private in-memory SQLite database, gone when the store is dropped
    pub fn in_memory() -> Self {
        Self::new(StoreType::Sqlite, "sqlite::memory:")
    }

    /// Read `GENERIC_DATA_STORE_TYPE`, `GENERIC_DATA_STORE_URL` and
    /// `GENERIC_DATA_STORE_MAX_CONNECTIONS` from the process environment.
    ///
    /// Unset variables fall back to a local SQLite file.
    pub fn from_env() -> Result<Self, StorageError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, StorageError> {
        let store_type = match lookup(ENV_STORE_TYPE) {
            Some(value) => value.parse::<StoreType>()?,
            None => StoreType::Sqlite,
        };

        let url = match (lookup(ENV_STORE_URL), store_type) {
            (Some(url), _) => url,
            (None, StoreType::Sqlite) => DEFAULT_SQLITE_URL.to_string(),
            (None, StoreType::Postgres) => {
                return Err(StorageError::Config(format!(
                    "{ENV_STORE_URL} must be set when {ENV_STORE_TYPE}=postgres"
                )));
            }
        };

        let max_connections = match lookup(ENV_MAX_CONNECTIONS) {
            Some(value) => value.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                StorageError::Config(format!(
                    "{ENV_MAX_CONNECTIONS} must be a positive integer, got '{value}'"
                ))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            store_type,
            url,
            max_connections,
        })
    }

    pub(crate) fn is_in_memory(&self) -> bool {
        self.store_type == StoreType::Sqlite
            && (self.url.contains(":memory:") || self.url.contains("mode=memory"))
    }

    /// Build the connection pool.
    ///
    /// Connections are opened lazily, so an unreachable database surfaces on
    /// the first query (normally table initialisation at startup).
    pub fn connect(&self) -> Result<Box<dyn DataStore>, StorageError> {
        // The URL may carry credentials, so only the backend is logged
        tracing::info!(
            "Initializing data store with type: {}, max connections: {}",
            self.store_type,
            self.max_connections
        );

        let store: Box<dyn DataStore> = match self.store_type {
            StoreType::Sqlite => {
                let opts = SqliteConnectOptions::from_str(&self.url)
                    .map_err(|e| {
                        StorageError::Config(format!(
                            "Failed to parse SQLite connection string: {e}"
                        ))
                    })?
                    .create_if_missing(true);

                // An in-memory database lives only as long as its connection
                let pool_options = if self.is_in_memory() {
                    SqlitePoolOptions::new()
                        .max_connections(1)
                        .idle_timeout(None)
                        .max_lifetime(None)
                } else {
                    SqlitePoolOptions::new().max_connections(self.max_connections)
                };

                Box::new(SqliteDataStore {
                    pool: pool_options.connect_lazy_with(opts),
                })
            }
            StoreType::Postgres => {
                let pool = PgPoolOptions::new()
                    .max_connections(self.max_connections)
                    .connect_lazy(&self.url)
                    .map_err(|e| {
                        StorageError::Config(format!("Failed to create Postgres pool: {e}"))
                    })?;

                Box::new(PostgresDataStore { pool })
            }
        };

        Ok(store)
    }
}
