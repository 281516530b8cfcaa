//! Storage Layer
//!
//! Key-value store abstraction and its backends.
//! TodoStore only ever talks to the `KeyValueStore` trait.

mod error;
mod traits;
mod memory;
mod file;
#[cfg(target_arch = "wasm32")]
mod local;

pub use error::{StorageError, StorageResult};
pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
