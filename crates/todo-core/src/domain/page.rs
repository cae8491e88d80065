//! Page data handed to the rendering layer.

use serde::{Deserialize, Serialize};

use super::Todo;

/// Data object produced by a page load.
///
/// Holds the decoded items under the single field `todos`. The item type is
/// generic so that callers who only need the raw JSON can decode into
/// `serde_json::Value` without losing any fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData<T> {
    pub todos: Vec<T>,
}

/// Page data for the todo list page.
pub type TodoPage = PageData<Todo>;

impl<T> PageData<T> {
    pub const fn new(todos: Vec<T>) -> Self {
        Self { todos }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

impl<T> From<Vec<T>> for PageData<T> {
    fn from(todos: Vec<T>) -> Self {
        Self::new(todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_serializes_under_todos_field() {
        let page = TodoPage::new(vec![Todo {
            id: 1,
            description: "a".to_string(),
            done: false,
        }]);
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"todos": [{"id": 1, "description": "a", "done": false}]})
        );
    }

    #[test]
    fn test_empty_page() {
        let page: PageData<serde_json::Value> = Vec::new().into();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
    }
}
