//! Browser local storage
//!
//! Wraps `window.localStorage`. Only built for wasm32.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::error::{StorageError, StorageResult};
use super::traits::KeyValueStore;

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Get the current window's local storage
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Backend("no global window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Backend("local storage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        // Throws QuotaExceededError when the origin is out of space
        self.storage.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", value))
}
