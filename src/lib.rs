//! Todo Store
//!
//! Layered architecture:
//! - domain: Todo entity and errors
//! - storage: Key-value store abstraction and backends
//! - store: TodoStore, the in-memory list kept in sync with storage
//! - commands: Handlers for the presentation layer

use std::sync::Mutex;

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod logging;
pub mod storage;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::TodoConfig;
pub use domain::{Entity, TodoError, TodoItem, TodoResult};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use store::TodoStore;

/// Application state shared across commands
pub struct AppState<S, C = SystemClock> {
    pub todo_store: Mutex<TodoStore<S, C>>,
}

impl<S, C> AppState<S, C> {
    pub fn new(todo_store: TodoStore<S, C>) -> Self {
        Self {
            todo_store: Mutex::new(todo_store),
        }
    }
}

/// Open a todo store persisted to a JSON file at `path`
pub fn open_file_store(path: impl Into<std::path::PathBuf>) -> StorageResult<TodoStore<FileStore>> {
    let storage = FileStore::open(path)?;
    Ok(TodoStore::new(storage))
}

/// Open a todo store backed by the browser's local storage
#[cfg(target_arch = "wasm32")]
pub fn open_local_storage() -> StorageResult<TodoStore<LocalStorage>> {
    let storage = LocalStorage::open()?;
    Ok(TodoStore::new(storage))
}
