//! Shared helpers for the crate's unit tests
//!
//! Every call to [`test_store`] gets its own in-memory SQLite database, so
//! tests never see each other's records and need no serialization.

use crate::storage::DataStoreConfig;
use crate::userdb::UserStore;

/// Fresh, initialized store backed by a private in-memory database
pub(crate) async fn test_store() -> UserStore {
    UserStore::connect(&DataStoreConfig::in_memory())
        .await
        .expect("Failed to initialize in-memory UserStore")
}
