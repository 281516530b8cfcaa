//! Store configuration
//!
//! Record keys and the timestamp format. Every field has a default, so a
//! partial JSON config only needs the values it overrides.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TODOS_KEY: &str = "todos";
pub const DEFAULT_LAST_ID_KEY: &str = "lastTodoId";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Key holding the JSON todo list
    pub todos_key: String,
    /// Key holding the id counter
    pub last_id_key: String,
    /// chrono format string for `registeredAt`
    pub timestamp_format: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            todos_key: DEFAULT_TODOS_KEY.to_string(),
            last_id_key: DEFAULT_LAST_ID_KEY.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl TodoConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_todos_key(mut self, key: impl Into<String>) -> Self {
        self.todos_key = key.into();
        self
    }

    pub fn with_last_id_key(mut self, key: impl Into<String>) -> Self {
        self.last_id_key = key.into();
        self
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TodoConfig::default();
        assert_eq!(config.todos_key, "todos");
        assert_eq!(config.last_id_key, "lastTodoId");
        assert_eq!(config.timestamp_format, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = TodoConfig::from_json(r#"{"todos_key":"work/todos"}"#).unwrap();
        assert_eq!(config.todos_key, "work/todos");
        assert_eq!(config.last_id_key, DEFAULT_LAST_ID_KEY);
    }

    #[test]
    fn test_builders() {
        let config = TodoConfig::default()
            .with_todos_key("a")
            .with_last_id_key("b")
            .with_timestamp_format("%H:%M");
        assert_eq!(config, TodoConfig::from_json(r#"{"todos_key":"a","last_id_key":"b","timestamp_format":"%H:%M"}"#).unwrap());
    }
}
