//! Todo domain types.

use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

/// A todo item that exists in the system with a database ID.
///
/// The serialized form is the wire format of the list endpoint:
/// `{"id": 1, "description": "...", "done": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Database ID (always present for persisted todos).
    pub id: i64,
    /// Free-form text of the item.
    pub description: String,
    /// Whether the item has been completed.
    pub done: bool,
}

/// A todo that has not been persisted yet.
///
/// New items always start out as not done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub description: String,
}

impl NewTodo {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Reject blank descriptions.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_description(&self.description)
    }
}

/// Full replacement of an existing todo's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoUpdate {
    pub id: i64,
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl TodoUpdate {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_description(&self.description)
    }
}

impl From<TodoUpdate> for Todo {
    fn from(update: TodoUpdate) -> Self {
        Self {
            id: update.id,
            description: update.description,
            done: update.done,
        }
    }
}

fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "description must not be empty".to_string(),
        ));
    }
    Ok(())
}
