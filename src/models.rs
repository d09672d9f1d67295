//! Frontend Models
//!
//! Data structures matching the remote todo service.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Characters escaped when a todo id is embedded in a DOM id.
/// `%` is escaped too so the mapping stays injective.
const DOM_ID_ESCAPE: &AsciiSet = &CONTROLS.add(b' ').add(b'%').add(b'"').add(b'#');

/// Todo identifier, assigned by the service (number or string on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Int(i64),
    Text(String),
}

impl TodoId {
    /// DOM id for the row's checkbox; the row label points at it.
    ///
    /// Integer and string ids get different prefixes so `1` and `"1"` never collide.
    pub fn dom_id(&self) -> String {
        match self {
            TodoId::Int(n) => format!("todo-{}", n),
            TodoId::Text(s) => format!("todo-s-{}", utf8_percent_encode(s, DOM_ID_ESCAPE)),
        }
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Int(n) => write!(f, "{}", n),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

/// Completion status of a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    #[default]
    Pending,
    Completed,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::Completed => "completed",
        }
    }

    /// The opposite status
    pub fn toggled(self) -> Self {
        match self {
            TodoStatus::Pending => TodoStatus::Completed,
            TodoStatus::Completed => TodoStatus::Pending,
        }
    }
}

/// Todo record (matches the service payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub body: String,
    pub status: TodoStatus,
}

impl Todo {
    pub fn is_completed(&self) -> bool {
        self.status == TodoStatus::Completed
    }
}

/// Tab filter selecting which statuses are requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    /// Tab order
    pub const TABS: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    /// Statuses requested from the service for this filter
    pub fn statuses(&self) -> &'static [TodoStatus] {
        match self {
            Filter::All => &[TodoStatus::Pending, TodoStatus::Completed],
            Filter::Pending => &[TodoStatus::Pending],
            Filter::Completed => &[TodoStatus::Completed],
        }
    }

    pub fn admits(&self, status: TodoStatus) -> bool {
        self.statuses().contains(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_decodes_numeric_and_string_ids() {
        let todos: Vec<Todo> = serde_json::from_str(
            r#"[
                {"id": 1, "body": "Buy milk", "status": "pending"},
                {"id": "a1b2", "body": "Walk dog", "status": "completed"}
            ]"#,
        )
        .unwrap();

        assert_eq!(todos[0].id, TodoId::Int(1));
        assert_eq!(todos[0].status, TodoStatus::Pending);
        assert_eq!(todos[1].id, TodoId::Text("a1b2".to_string()));
        assert!(todos[1].is_completed());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_str::<Todo>(r#"{"id": 1, "body": "x", "status": "archived"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_toggle_flips_status() {
        assert_eq!(TodoStatus::Pending.toggled(), TodoStatus::Completed);
        assert_eq!(TodoStatus::Completed.toggled(), TodoStatus::Pending);
    }

    #[test]
    fn test_filter_statuses() {
        assert!(Filter::All.admits(TodoStatus::Pending));
        assert!(Filter::All.admits(TodoStatus::Completed));
        assert!(Filter::Pending.admits(TodoStatus::Pending));
        assert!(!Filter::Pending.admits(TodoStatus::Completed));
        assert!(!Filter::Completed.admits(TodoStatus::Pending));
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn test_dom_ids_are_distinct() {
        let int_id = TodoId::Int(1).dom_id();
        let text_id = TodoId::Text("1".to_string()).dom_id();
        assert_ne!(int_id, text_id);
        assert_eq!(int_id, "todo-1");

        // "a b" must not collide with a literal "a%20b"
        let spaced = TodoId::Text("a b".to_string()).dom_id();
        let escaped = TodoId::Text("a%20b".to_string()).dom_id();
        assert_ne!(spaced, escaped);
        assert!(!spaced.contains(' '));
    }
}
