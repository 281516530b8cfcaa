//! Logging setup
//!
//! Installs a `tracing` subscriber for binaries and tests that embed the store.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` wins over `default_directive` when set. Fails if a global
/// subscriber is already installed.
pub fn init_logging(default_directive: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)))
        .with(
            fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_file(false),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging("todo_store=debug");
        assert!(init_logging("todo_store=debug").is_err());
    }
}
