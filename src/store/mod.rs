//! Todo Store
//!
//! Owns the todo list and the id counter, and writes both back to a
//! `KeyValueStore` after every mutation.
//!
//! Loading never fails: a missing, unreadable or malformed record falls back
//! to its default (empty list, counter 0) and a warning is logged.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::TodoConfig;
use crate::domain::{Entity, TodoError, TodoItem, TodoResult};
use crate::storage::KeyValueStore;


pub struct TodoStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    config: TodoConfig,
    /// Newest first
    todos: Vec<TodoItem>,
    last_todo_id: u32,
    revision: u64,
}

impl<S: KeyValueStore> TodoStore<S, SystemClock> {
    /// Open with local time stamps and the default keys
    pub fn new(storage: S) -> Self {
        Self::open(storage, SystemClock, TodoConfig::default())
    }
}

impl<S: KeyValueStore, C: Clock> TodoStore<S, C> {
    /// Load the todo list and counter from `storage`
    pub fn open(storage: S, clock: C, config: TodoConfig) -> Self {
        let todos = load_todos(&storage, &config.todos_key);
        let stored_id = load_last_id(&storage, &config.last_id_key);

        // The counter must stay ahead of every id that is already in use
        let max_id = todos.iter().map(|todo| todo.id).max().unwrap_or(0);
        let last_todo_id = if stored_id < max_id {
            warn!(stored_id, max_id, "id counter behind stored todos, raising it");
            max_id
        } else {
            stored_id
        };

        info!(count = todos.len(), last_todo_id, "todo store opened");

        Self {
            storage,
            clock,
            config,
            todos,
            last_todo_id,
            revision: 0,
        }
    }

    /// Create a new item at the top of the list
    pub fn add_todo(&mut self, content: impl Into<String>) -> TodoResult<TodoItem> {
        let id = self
            .last_todo_id
            .checked_add(1)
            .ok_or(TodoError::IdsExhausted(self.last_todo_id))?;
        let todo = TodoItem::new(id, content, self.clock.now(&self.config.timestamp_format));

        let mut todos = Vec::with_capacity(self.todos.len() + 1);
        todos.push(todo.clone());
        todos.extend(self.todos.iter().cloned());

        // Counter first: a failure in between leaves it ahead, never behind
        let encoded = serde_json::to_string(&todos)?;
        self.storage.set(&self.config.last_id_key, &id.to_string())?;
        self.storage.set(&self.config.todos_key, &encoded)?;

        debug!(id, "todo added");
        self.last_todo_id = id;
        self.commit(todos);
        Ok(todo)
    }

    /// Delete the item with `id`; unknown ids are a no-op
    pub fn remove_todo(&mut self, id: u32) -> TodoResult<()> {
        let todos: Vec<TodoItem> = self
            .todos
            .iter()
            .filter(|todo| !todo.matches(id))
            .cloned()
            .collect();

        if todos.len() == self.todos.len() {
            debug!(id, "remove: no such todo");
        }
        self.persist(todos)
    }

    /// Replace the content of the item with `id`; unknown ids are a no-op
    pub fn modify_todo(&mut self, id: u32, new_content: impl Into<String>) -> TodoResult<()> {
        let new_content = new_content.into();
        let todos = self.map_matching(id, |todo| todo.with_content(new_content.as_str()));
        self.persist(todos)
    }

    /// Flip the completion flag of the item with `id`; unknown ids are a no-op
    pub fn toggle_complete(&mut self, id: u32) -> TodoResult<()> {
        let todos = self.map_matching(id, TodoItem::toggled);
        self.persist(todos)
    }

    /// All items, newest first
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn get_todo(&self, id: u32) -> Option<&TodoItem> {
        self.todos.iter().find(|todo| todo.matches(id))
    }

    /// Highest id handed out so far
    pub fn last_todo_id(&self) -> u32 {
        self.last_todo_id
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Bumped after every successful mutating call, for views that re-render on change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn config(&self) -> &TodoConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the underlying store, e.g. to reopen it
    pub fn into_inner(self) -> S {
        self.storage
    }

    fn map_matching(&self, id: u32, f: impl Fn(&TodoItem) -> TodoItem) -> Vec<TodoItem> {
        let mut found = false;
        let todos = self
            .todos
            .iter()
            .map(|todo| {
                if todo.matches(id) {
                    found = true;
                    f(todo)
                } else {
                    todo.clone()
                }
            })
            .collect();

        if !found {
            debug!(id, "no such todo");
        }
        todos
    }

    /// Write the list, then make it current
    fn persist(&mut self, todos: Vec<TodoItem>) -> TodoResult<()> {
        let encoded = serde_json::to_string(&todos)?;
        self.storage.set(&self.config.todos_key, &encoded)?;
        self.commit(todos);
        Ok(())
    }

    fn commit(&mut self, todos: Vec<TodoItem>) {
        self.todos = todos;
        self.revision += 1;
    }
}

impl<S, C> std::fmt::Debug for TodoStore<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.todos)
            .field("last_todo_id", &self.last_todo_id)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

/// Read the todo list, falling back to an empty one
fn load_todos<S: KeyValueStore>(storage: &S, key: &str) -> Vec<TodoItem> {
    let text = match storage.get(key) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "failed to read todos, starting empty");
            return Vec::new();
        }
    };

    let todos = match serde_json::from_str::<Option<Vec<TodoItem>>>(&text) {
        Ok(todos) => todos.unwrap_or_default(),
        Err(e) => {
            warn!(key, error = %e, "malformed todos record, starting empty");
            return Vec::new();
        }
    };

    // Keep the first (newest) record for each id
    let mut seen = HashSet::new();
    let before = todos.len();
    let todos: Vec<TodoItem> = todos.into_iter().filter(|todo| seen.insert(todo.id())).collect();
    if todos.len() != before {
        warn!(key, dropped = before - todos.len(), "dropped todos with duplicate ids");
    }
    todos
}

/// Read the id counter, falling back to 0
fn load_last_id<S: KeyValueStore>(storage: &S, key: &str) -> u32 {
    match storage.get(key) {
        Ok(Some(text)) => parse_leading_int(&text).unwrap_or_else(|| {
            warn!(key, value = %text, "malformed id counter, starting at 0");
            0
        }),
        Ok(None) => 0,
        Err(e) => {
            warn!(key, error = %e, "failed to read id counter, starting at 0");
            0
        }
    }
}

/// Lenient integer parse: optional `+`, then the leading run of digits
fn parse_leading_int(text: &str) -> Option<u32> {
    let text = text.trim();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(text.len(), |(i, _)| i);
    text[..end].parse().ok()
}
