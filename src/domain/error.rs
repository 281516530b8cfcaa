//! Domain errors
//!
//! Only failures to write state are surfaced. Unknown ids and malformed
//! stored records are not errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("failed to encode todos: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("todo ids exhausted (last id {0})")]
    IdsExhausted(u32),
}
