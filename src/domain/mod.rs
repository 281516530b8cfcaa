//! Domain Layer
//!
//! Contains the todo entity and the errors raised by todo operations.
//! Only depends on serde (plus the storage error it wraps).

mod entity;
mod error;
mod todo;

pub use entity::Entity;
pub use error::{TodoError, TodoResult};
pub use todo::TodoItem;
