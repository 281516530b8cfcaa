//! In-memory key-value store
//!
//! Lives for the process only. Used as the store fake in tests.

use std::collections::HashMap;

use super::error::StorageResult;
use super::traits::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, e.g. to simulate state left by a previous session
    pub fn with_record(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.records.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("todos").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new().with_record("lastTodoId", "1");
        store.set("lastTodoId", "2").unwrap();
        assert_eq!(store.get("lastTodoId").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("todos", "[]").unwrap();
        assert_eq!(store.get("todos").unwrap().as_deref(), Some("[]"));
    }
}
