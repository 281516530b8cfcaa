//! Todo Entity
//!
//! A single task on the list. Stored as `{id, content, registeredAt, isCompleted}`.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier, assigned from the id counter
    pub id: u32,
    /// Item text, may be empty
    pub content: String,
    /// Creation timestamp, never changed after creation
    #[serde(alias = "regDate")]
    pub registered_at: String,
    /// Completion status
    #[serde(default)]
    pub is_completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item
    pub fn new(id: u32, content: impl Into<String>, registered_at: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            registered_at: registered_at.into(),
            is_completed: false,
        }
    }

    /// Copy of this item with different content
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    /// Copy of this item with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }
}

impl Entity for TodoItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = TodoItem::new(1, "Test item", "2024-01-01 09:00:00");
        assert_eq!(todo.id(), 1);
        assert_eq!(todo.content, "Test item");
        assert!(!todo.is_completed);
        assert!(todo.matches(1));
        assert!(!todo.matches(2));
    }

    #[test]
    fn test_with_content_keeps_other_fields() {
        let todo = TodoItem::new(3, "old", "2024-01-01 09:00:00").toggled();
        let edited = todo.with_content("new");
        assert_eq!(edited.id, 3);
        assert_eq!(edited.content, "new");
        assert_eq!(edited.registered_at, "2024-01-01 09:00:00");
        assert!(edited.is_completed);
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        let todo = TodoItem::new(1, "x", "t");
        assert_eq!(todo.toggled().toggled(), todo);
    }

    #[test]
    fn test_json_field_names() {
        let todo = TodoItem::new(7, "buy milk", "2024-01-01 09:00:00");
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "content": "buy milk",
                "registeredAt": "2024-01-01 09:00:00",
                "isCompleted": false
            })
        );
    }

    #[test]
    fn test_legacy_reg_date_is_accepted() {
        let json = r#"{"id":2,"content":"walk dog","regDate":"2023-05-06 07:08:09","isCompleted":true}"#;
        let todo: TodoItem = serde_json::from_str(json).unwrap();
        assert_eq!(todo.registered_at, "2023-05-06 07:08:09");
        assert!(todo.is_completed);
    }

    #[test]
    fn test_missing_completion_flag_defaults_to_false() {
        let json = r#"{"id":2,"content":"walk dog","registeredAt":"t"}"#;
        let todo: TodoItem = serde_json::from_str(json).unwrap();
        assert!(!todo.is_completed);
    }
}
