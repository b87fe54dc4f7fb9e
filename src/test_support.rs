//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ClockZone;
use crate::api::{ApiError, OwnerRecord, TodoBackend, TodoRecord};
use crate::core::state::App;

/// A backend call as recorded by `FakeBackend`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListTodos,
    ListOwners,
    Create(String),
    Update { id: String, todo_text: String },
    DeleteTodo(String),
    DeleteOwner(String),
}

/// In-memory backend that records every call and can fail a chosen one.
#[derive(Default)]
pub struct FakeBackend {
    todos: Vec<TodoRecord>,
    owners: Vec<OwnerRecord>,
    fail_on: Option<Call>,
    calls: Mutex<Vec<Call>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(mut self, todos: Vec<TodoRecord>) -> Self {
        self.todos = todos;
        self
    }

    pub fn with_owners(mut self, owners: Vec<OwnerRecord>) -> Self {
        self.owners = owners;
        self
    }

    /// Makes the matching call answer HTTP 500.
    pub fn failing(mut self, call: Call) -> Self {
        self.fail_on = Some(call);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        let fails = self.fail_on.as_ref() == Some(&call);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if fails {
            Err(ApiError::Api {
                status: 500,
                message: String::new(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TodoBackend for FakeBackend {
    async fn list_todos(&self) -> Result<Vec<TodoRecord>, ApiError> {
        self.record(Call::ListTodos)?;
        Ok(self.todos.clone())
    }

    async fn list_owners(&self) -> Result<Vec<OwnerRecord>, ApiError> {
        self.record(Call::ListOwners)?;
        Ok(self.owners.clone())
    }

    async fn create_todo(&self, todo_text: &str) -> Result<(), ApiError> {
        self.record(Call::Create(todo_text.to_string()))
    }

    async fn update_todo(&self, id: &str, todo_text: &str) -> Result<(), ApiError> {
        self.record(Call::Update {
            id: id.to_string(),
            todo_text: todo_text.to_string(),
        })
    }

    async fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        self.record(Call::DeleteTodo(id.to_string()))
    }

    async fn delete_owner(&self, id: &str) -> Result<(), ApiError> {
        self.record(Call::DeleteOwner(id.to_string()))
    }
}

pub fn todo(id: &str, text: &str, created_at: &str) -> TodoRecord {
    TodoRecord {
        id: id.to_string(),
        todo_text: text.to_string(),
        created_at: created_at.to_string(),
    }
}

pub fn owner(id: &str, name: &str) -> OwnerRecord {
    OwnerRecord {
        id: id.to_string(),
        name: name.to_string(),
        course_id: "261497".to_string(),
        section: "001".to_string(),
    }
}

/// Creates a test App pointed at an unroutable backend.
pub fn test_app() -> App {
    App::new("http://test.invalid".to_string(), ClockZone::Source)
}
