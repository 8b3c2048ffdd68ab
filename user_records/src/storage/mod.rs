mod config;
mod data_store;
mod errors;
mod schema_validation;

pub use data_store::{DataStore, DataStoreConfig, StoreType};
pub use errors::StorageError;

pub(crate) use config::DB_TABLE_PREFIX;
pub(crate) use schema_validation::{validate_postgres_table_schema, validate_sqlite_table_schema};
