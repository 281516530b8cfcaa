//! Todo Commands
//!
//! Exposes TodoStore operations to the presentation layer.

use std::sync::MutexGuard;

use crate::clock::Clock;
use crate::domain::TodoItem;
use crate::storage::KeyValueStore;
use crate::store::TodoStore;
use crate::AppState;

fn lock_store<S, C>(state: &AppState<S, C>) -> Result<MutexGuard<'_, TodoStore<S, C>>, String> {
    state
        .todo_store
        .lock()
        .map_err(|_| "Todo store lock poisoned".to_string())
}

/// List all todos, newest first
pub fn list_todos<S: KeyValueStore, C: Clock>(state: &AppState<S, C>) -> Result<Vec<TodoItem>, String> {
    let store = lock_store(state)?;
    Ok(store.todos().to_vec())
}

/// Get todo by ID (used to prefill the edit form)
pub fn get_todo<S: KeyValueStore, C: Clock>(state: &AppState<S, C>, id: u32) -> Result<Option<TodoItem>, String> {
    let store = lock_store(state)?;
    Ok(store.get_todo(id).cloned())
}

/// Create a new todo
pub fn add_todo<S: KeyValueStore, C: Clock>(state: &AppState<S, C>, content: String) -> Result<TodoItem, String> {
    let mut store = lock_store(state)?;
    store.add_todo(content).map_err(|e| e.to_string())
}

/// Delete todo
pub fn remove_todo<S: KeyValueStore, C: Clock>(state: &AppState<S, C>, id: u32) -> Result<(), String> {
    let mut store = lock_store(state)?;
    store.remove_todo(id).map_err(|e| e.to_string())
}

/// Replace todo content
pub fn modify_todo<S: KeyValueStore, C: Clock>(
    state: &AppState<S, C>,
    id: u32,
    content: String,
) -> Result<(), String> {
    let mut store = lock_store(state)?;
    store.modify_todo(id, content).map_err(|e| e.to_string())
}

/// Toggle todo completion status
pub fn toggle_complete<S: KeyValueStore, C: Clock>(state: &AppState<S, C>, id: u32) -> Result<(), String> {
    let mut store = lock_store(state)?;
    store.toggle_complete(id).map_err(|e| e.to_string())
}

/// Change counter for views that reload on change
pub fn todos_revision<S: KeyValueStore, C: Clock>(state: &AppState<S, C>) -> Result<u64, String> {
    let store = lock_store(state)?;
    Ok(store.revision())
}
