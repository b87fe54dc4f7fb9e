//! # Actions
//!
//! Everything that can happen in the client becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Backend answers? That's `Action::SnapshotLoaded(..)` or `Action::RequestFailed(..)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect` the adapter should run next. No I/O
//! here; requests are described by `Effect` and executed elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every mutation that succeeds is followed by `Effect::Fetch`: the client
//! never patches its lists locally.

use log::{debug, info, warn};

use crate::core::listing::sort_todos;
use crate::core::state::{App, Snapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Re-read both lists from the backend.
    Refresh,
    /// The input line now holds this text.
    InputChanged(String),
    /// Create (ADD) or update (EDIT) from the input line.
    Submit,
    /// Edit affordance on the todo with this id.
    BeginEdit(String),
    CancelEdit,
    DeleteTodo(String),
    DeleteOwner(String),
    DismissNotification,

    // Backend outcomes
    SnapshotLoaded(Snapshot),
    TodoCreated,
    TodoUpdated,
    TodoDeleted,
    OwnerDeleted,
    /// Any request failed. Carries the error text shown to the user.
    RequestFailed(String),
}

/// Side effect requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Fetch todos and owners concurrently.
    Fetch,
    CreateTodo(String),
    UpdateTodo { id: String, todo_text: String },
    DeleteTodo(String),
    DeleteOwner(String),
}

impl Effect {
    /// True when running this effect sends at least one request.
    pub fn is_request(&self) -> bool {
        !matches!(self, Effect::None | Effect::Quit)
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);

    let effect = match action {
        Action::Quit => Effect::Quit,

        Action::Refresh => Effect::Fetch,

        Action::InputChanged(text) => {
            app.edit.input_text = text;
            Effect::None
        }

        Action::Submit => {
            let text = app.edit.input_text.clone();
            if text.is_empty() {
                return Effect::None;
            }
            match app.edit.target_id() {
                Some(id) => Effect::UpdateTodo {
                    id: id.to_string(),
                    todo_text: text,
                },
                None => Effect::CreateTodo(text),
            }
        }

        Action::BeginEdit(id) => {
            match app.todos.iter().find(|t| t.id == id) {
                Some(todo) => {
                    app.edit.begin_edit(&todo.id, &todo.todo_text);
                    app.status_message = format!("Editing todo {}", todo.id);
                }
                None => warn!("Edit requested for unknown todo {}", id),
            }
            Effect::None
        }

        Action::CancelEdit => {
            app.edit.reset();
            app.status_message = String::from("Edit cancelled");
            Effect::None
        }

        Action::DeleteTodo(id) => {
            // The delete affordance is hidden while editing.
            if app.edit.is_editing() {
                debug!("Ignoring delete of todo {} while editing", id);
                Effect::None
            } else {
                Effect::DeleteTodo(id)
            }
        }

        Action::DeleteOwner(id) => Effect::DeleteOwner(id),

        Action::DismissNotification => {
            app.notifications.pop_front();
            Effect::None
        }

        Action::SnapshotLoaded(Snapshot { mut todos, owners }) => {
            finish_request(app);
            sort_todos(&mut todos);
            info!("Synced {} todos, {} owners", todos.len(), owners.len());
            app.status_message = format!("{} todos, {} owners", todos.len(), owners.len());
            app.todos = todos;
            app.owners = owners;
            Effect::None
        }

        Action::TodoCreated => {
            finish_request(app);
            app.edit.input_text.clear();
            app.status_message = String::from("Todo added");
            Effect::Fetch
        }

        Action::TodoUpdated => {
            finish_request(app);
            app.edit.reset();
            app.status_message = String::from("Todo updated");
            Effect::Fetch
        }

        Action::TodoDeleted => {
            finish_request(app);
            app.edit.reset();
            app.status_message = String::from("Todo deleted");
            Effect::Fetch
        }

        Action::OwnerDeleted => {
            finish_request(app);
            app.status_message = String::from("Owner deleted");
            Effect::Fetch
        }

        Action::RequestFailed(message) => {
            finish_request(app);
            warn!("Request failed: {}", message);
            app.status_message = String::from("Request failed");
            app.notifications.push_back(message);
            Effect::None
        }
    };

    if effect.is_request() {
        app.in_flight += 1;
    }
    effect
}

fn finish_request(app: &mut App) {
    app.in_flight = app.in_flight.saturating_sub(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::edit::EditMode;
    use crate::test_support::{owner, test_app, todo};

    fn app_with_todos() -> App {
        let mut app = test_app();
        update(
            &mut app,
            Action::SnapshotLoaded(Snapshot {
                todos: vec![
                    todo("1", "buy milk", "2024-01-02T10:00:00Z"),
                    todo("2", "walk dog", "2024-01-01T09:00:00Z"),
                ],
                owners: vec![owner("o1", "Ann")],
            }),
        );
        app
    }

    #[test]
    fn test_submit_in_add_mode_creates_exact_text() {
        let mut app = test_app();
        update(&mut app, Action::InputChanged("  call mom ".to_string()));

        let effect = update(&mut app, Action::Submit);
        assert_eq!(effect, Effect::CreateTodo("  call mom ".to_string()));
        assert_eq!(app.in_flight, 1);

        let effect = update(&mut app, Action::TodoCreated);
        assert_eq!(effect, Effect::Fetch);
        assert!(app.edit.input_text.is_empty());
        assert_eq!(app.edit.mode, EditMode::Add);
    }

    #[test]
    fn test_submit_empty_input_is_noop() {
        let mut app = app_with_todos();
        let todos_before = app.todos.clone();
        let status_before = app.status_message.clone();

        let effect = update(&mut app, Action::Submit);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.in_flight, 0);
        assert_eq!(app.todos, todos_before);
        assert_eq!(app.status_message, status_before);
        assert_eq!(app.edit, Default::default());
    }

    #[test]
    fn test_submit_in_edit_mode_updates_target() {
        let mut app = app_with_todos();
        update(&mut app, Action::BeginEdit("1".to_string()));
        update(&mut app, Action::InputChanged("buy oat milk".to_string()));

        let effect = update(&mut app, Action::Submit);
        assert_eq!(
            effect,
            Effect::UpdateTodo {
                id: "1".to_string(),
                todo_text: "buy oat milk".to_string()
            }
        );

        let effect = update(&mut app, Action::TodoUpdated);
        assert_eq!(effect, Effect::Fetch);
        assert!(!app.edit.is_editing());
        assert!(app.edit.input_text.is_empty());
    }

    #[test]
    fn test_second_edit_click_retargets() {
        let mut app = app_with_todos();
        update(&mut app, Action::BeginEdit("1".to_string()));
        update(&mut app, Action::InputChanged("half-typed".to_string()));
        update(&mut app, Action::BeginEdit("2".to_string()));

        assert_eq!(app.edit.target_id(), Some("2"));
        assert_eq!(app.edit.input_text, "walk dog");
    }

    #[test]
    fn test_edit_unknown_id_is_ignored() {
        let mut app = app_with_todos();
        update(&mut app, Action::InputChanged("draft".to_string()));
        let effect = update(&mut app, Action::BeginEdit("missing".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(!app.edit.is_editing());
        assert_eq!(app.edit.input_text, "draft");
    }

    #[test]
    fn test_cancel_resets_without_request() {
        let mut app = app_with_todos();
        update(&mut app, Action::BeginEdit("1".to_string()));
        let effect = update(&mut app, Action::CancelEdit);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.edit, Default::default());
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn test_todo_deleted_always_resets_session() {
        let mut app = app_with_todos();
        update(&mut app, Action::InputChanged("draft".to_string()));
        let effect = update(&mut app, Action::DeleteTodo("2".to_string()));
        assert_eq!(effect, Effect::DeleteTodo("2".to_string()));

        let effect = update(&mut app, Action::TodoDeleted);
        assert_eq!(effect, Effect::Fetch);
        assert_eq!(app.edit, Default::default());
    }

    #[test]
    fn test_todo_deleted_resets_even_if_editing_started_meanwhile() {
        let mut app = app_with_todos();
        update(&mut app, Action::DeleteTodo("2".to_string()));
        update(&mut app, Action::BeginEdit("1".to_string()));

        update(&mut app, Action::TodoDeleted);
        assert!(!app.edit.is_editing());
        assert!(app.edit.input_text.is_empty());
    }

    #[test]
    fn test_delete_todo_hidden_while_editing() {
        let mut app = app_with_todos();
        update(&mut app, Action::BeginEdit("1".to_string()));
        let effect = update(&mut app, Action::DeleteTodo("2".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(app.edit.is_editing());
    }

    #[test]
    fn test_owner_delete_leaves_session_alone() {
        let mut app = app_with_todos();
        update(&mut app, Action::BeginEdit("1".to_string()));

        let effect = update(&mut app, Action::DeleteOwner("o1".to_string()));
        assert_eq!(effect, Effect::DeleteOwner("o1".to_string()));

        let effect = update(&mut app, Action::OwnerDeleted);
        assert_eq!(effect, Effect::Fetch);
        assert_eq!(app.edit.target_id(), Some("1"));
        assert_eq!(app.edit.input_text, "buy milk");
    }

    #[test]
    fn test_failed_update_keeps_session_and_does_not_refetch() {
        let mut app = app_with_todos();
        update(&mut app, Action::BeginEdit("1".to_string()));
        update(&mut app, Action::InputChanged("typed by user".to_string()));
        update(&mut app, Action::Submit);

        let effect = update(
            &mut app,
            Action::RequestFailed("request failed with status code 500".to_string()),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.edit.input_text, "typed by user");
        assert_eq!(app.edit.target_id(), Some("1"));
        assert_eq!(
            app.notification(),
            Some("request failed with status code 500")
        );
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn test_failed_create_keeps_input() {
        let mut app = test_app();
        update(&mut app, Action::InputChanged("new".to_string()));
        update(&mut app, Action::Submit);
        update(&mut app, Action::RequestFailed("network error".to_string()));
        assert_eq!(app.edit.input_text, "new");
        assert!(!app.edit.is_editing());
    }

    #[test]
    fn test_failed_fetch_leaves_lists_unchanged() {
        let mut app = app_with_todos();
        let todos_before = app.todos.clone();
        let owners_before = app.owners.clone();

        update(&mut app, Action::Refresh);
        update(&mut app, Action::RequestFailed("network error: refused".to_string()));

        assert_eq!(app.todos, todos_before);
        assert_eq!(app.owners, owners_before);
        assert!(app.notification().is_some());
    }

    #[test]
    fn test_snapshot_sorts_todos_by_creation() {
        let app = app_with_todos();
        let texts: Vec<&str> = app.todos.iter().map(|t| t.todo_text.as_str()).collect();
        assert_eq!(texts, vec!["walk dog", "buy milk"]);
        assert_eq!(app.owners.len(), 1);
        assert_eq!(app.status_message, "2 todos, 1 owners");
    }

    #[test]
    fn test_dismiss_notification() {
        let mut app = test_app();
        update(&mut app, Action::RequestFailed("boom".to_string()));
        update(&mut app, Action::DismissNotification);
        assert!(app.notification().is_none());
    }

    #[test]
    fn test_each_failure_is_shown_in_turn() {
        let mut app = test_app();
        update(&mut app, Action::Refresh);
        update(&mut app, Action::InputChanged("x".to_string()));
        update(&mut app, Action::Submit);
        update(&mut app, Action::RequestFailed("network error: refused".to_string()));
        update(
            &mut app,
            Action::RequestFailed("request failed with status code 500".to_string()),
        );

        assert_eq!(app.notification(), Some("network error: refused"));
        update(&mut app, Action::DismissNotification);
        assert_eq!(app.notification(), Some("request failed with status code 500"));
        update(&mut app, Action::DismissNotification);
        assert!(app.notification().is_none());

        // Extra dismissals are harmless.
        update(&mut app, Action::DismissNotification);
        assert!(app.notification().is_none());
    }

    #[test]
    fn test_in_flight_tracks_overlapping_requests() {
        let mut app = test_app();
        update(&mut app, Action::Refresh);
        update(&mut app, Action::InputChanged("x".to_string()));
        update(&mut app, Action::Submit);
        assert_eq!(app.in_flight, 2);
        assert!(app.is_loading());

        // Create finishing schedules a refetch: one done, one started.
        update(&mut app, Action::TodoCreated);
        assert_eq!(app.in_flight, 2);

        update(&mut app, Action::SnapshotLoaded(Snapshot::default()));
        update(&mut app, Action::SnapshotLoaded(Snapshot::default()));
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
