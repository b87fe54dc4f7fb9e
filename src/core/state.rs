//! # Application State
//!
//! Core business state for the client. Domain data only, no TUI types.
//! Presentation state (focus, list selection, cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── todos: Vec<TodoRecord>        // last fetched, display order
//! ├── owners: Vec<OwnerRecord>      // last fetched, server order
//! ├── edit: EditSession             // ADD/EDIT mode + input line
//! ├── status_message: String        // title bar text
//! ├── notifications: VecDeque<String> // blocking errors, oldest shown first
//! ├── in_flight: usize              // requests not yet answered
//! ├── base_url: String              // backend being talked to
//! └── clock: ClockZone              // how creation times are shown
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The lists are never edited locally: they are replaced wholesale by the
//! next successful fetch, so after each round trip they equal the backend.

use std::collections::VecDeque;

use crate::ClockZone;
use crate::api::{OwnerRecord, TodoRecord};
use crate::core::config::ResolvedConfig;
use crate::core::edit::EditSession;

/// Result of one successful fetch of both lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub todos: Vec<TodoRecord>,
    pub owners: Vec<OwnerRecord>,
}

pub struct App {
    pub todos: Vec<TodoRecord>,
    pub owners: Vec<OwnerRecord>,
    pub edit: EditSession,
    pub status_message: String,
    /// One entry per failed request, each dismissed separately.
    pub notifications: VecDeque<String>,
    pub in_flight: usize,
    pub base_url: String,
    pub clock: ClockZone,
}

impl App {
    pub fn new(base_url: String, clock: ClockZone) -> Self {
        Self {
            todos: Vec::new(),
            owners: Vec::new(),
            edit: EditSession::new(),
            status_message: String::from("Loading..."),
            notifications: VecDeque::new(),
            in_flight: 0,
            base_url,
            clock,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.base_url.clone(), config.clock)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// The error currently blocking the screen, if any.
    pub fn notification(&self) -> Option<&str> {
        self.notifications.front().map(String::as_str)
    }

    pub fn find_todo(&self, id: &str) -> Option<&TodoRecord> {
        self.todos.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{test_app, todo};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Loading...");
        assert!(!app.is_loading());
        assert!(app.notification().is_none());
        assert!(!app.edit.is_editing());
        assert_eq!(app.base_url, "http://test.invalid");
    }

    #[test]
    fn test_find_todo() {
        let mut app = test_app();
        app.todos = vec![todo("1", "a", ""), todo("2", "b", "")];
        assert_eq!(app.find_todo("2").map(|t| t.todo_text.as_str()), Some("b"));
        assert!(app.find_todo("3").is_none());
    }
}
