//! Commands Layer
//!
//! Handlers the presentation layer calls. Errors cross this boundary as strings.

mod todo_cmd;

pub use todo_cmd::*;
