mod config;
mod types;

pub use config::DataStoreConfig;
pub use types::{DataStore, StoreType};
