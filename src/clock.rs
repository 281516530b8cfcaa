//! Timestamp source for new todos

use chrono::Local;

/// Produces the `registeredAt` text for new items
pub trait Clock {
    /// Current time rendered with a chrono format string
    fn now(&self, format: &str) -> String;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self, format: &str) -> String {
        Local::now().format(format).to_string()
    }
}

/// Always returns the same timestamp, ignoring the format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn now(&self, _format: &str) -> String {
        self.0.clone()
    }
}
