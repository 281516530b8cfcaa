//! Storage Layer - Core Traits
//!
//! The contract TodoStore needs from its persistent store.
//! Implementations can be in-memory, file-backed, browser local storage, etc.

use super::error::StorageResult;

/// Synchronous string key-value store
///
/// Both operations must be usable before TodoStore is opened and after
/// every mutation. A missing key is `Ok(None)`, not an error.
pub trait KeyValueStore {
    /// Read the record stored under `key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write (or overwrite) the record stored under `key`
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
