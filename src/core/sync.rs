//! # Backend Round Trips
//!
//! Runs an `Effect` against a `TodoBackend` and reports the outcome as the
//! `Action` the reducer expects next. Only the `TodoBackend` trait is seen
//! here, so tests drive it with an in-memory fake.

use log::{debug, info};

use crate::api::{ApiError, TodoBackend};
use crate::core::action::{Action, Effect};
use crate::core::state::Snapshot;

/// Fetches both lists concurrently. Either request failing fails the whole
/// fetch, so callers never see one fresh list next to one stale list.
pub async fn fetch_snapshot(backend: &dyn TodoBackend) -> Result<Snapshot, ApiError> {
    let (todos, owners) = futures::try_join!(backend.list_todos(), backend.list_owners())?;
    debug!("Fetched {} todos and {} owners", todos.len(), owners.len());
    Ok(Snapshot { todos, owners })
}

/// Executes one effect. Returns `None` for effects that need no request.
pub async fn execute(effect: Effect, backend: &dyn TodoBackend) -> Option<Action> {
    let outcome = match effect {
        Effect::None | Effect::Quit => return None,
        Effect::Fetch => fetch_snapshot(backend).await.map(Action::SnapshotLoaded),
        Effect::CreateTodo(text) => {
            info!("Creating todo ({} bytes)", text.len());
            backend.create_todo(&text).await.map(|_| Action::TodoCreated)
        }
        Effect::UpdateTodo { id, todo_text } => {
            info!("Updating todo {}", id);
            backend
                .update_todo(&id, &todo_text)
                .await
                .map(|_| Action::TodoUpdated)
        }
        Effect::DeleteTodo(id) => {
            info!("Deleting todo {}", id);
            backend.delete_todo(&id).await.map(|_| Action::TodoDeleted)
        }
        Effect::DeleteOwner(id) => {
            info!("Deleting owner {}", id);
            backend.delete_owner(&id).await.map(|_| Action::OwnerDeleted)
        }
    };

    Some(outcome.unwrap_or_else(|e| Action::RequestFailed(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Call, FakeBackend, owner, todo};

    #[tokio::test]
    async fn test_fetch_snapshot_reads_both_lists() {
        let backend = FakeBackend::new()
            .with_todos(vec![todo("1", "a", "2024-01-01")])
            .with_owners(vec![owner("o", "Ann")]);

        let snapshot = fetch_snapshot(&backend).await.unwrap();
        assert_eq!(snapshot.todos.len(), 1);
        assert_eq!(snapshot.owners.len(), 1);

        let calls = backend.calls();
        assert!(calls.contains(&Call::ListTodos));
        assert!(calls.contains(&Call::ListOwners));
    }

    #[tokio::test]
    async fn test_fetch_fails_when_either_list_fails() {
        let backend = FakeBackend::new()
            .with_todos(vec![todo("1", "a", "")])
            .failing(Call::ListOwners);

        let result = fetch_snapshot(&backend).await;
        assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_create_issues_exactly_one_request() {
        let backend = FakeBackend::new();
        let action = execute(Effect::CreateTodo("buy milk".to_string()), &backend).await;

        assert_eq!(action, Some(Action::TodoCreated));
        assert_eq!(backend.calls(), vec![Call::Create("buy milk".to_string())]);
    }

    #[tokio::test]
    async fn test_update_failure_reports_error_text() {
        let backend = FakeBackend::new().failing(Call::Update {
            id: "1".to_string(),
            todo_text: "x".to_string(),
        });
        let action = execute(
            Effect::UpdateTodo {
                id: "1".to_string(),
                todo_text: "x".to_string(),
            },
            &backend,
        )
        .await;

        assert_eq!(
            action,
            Some(Action::RequestFailed(
                "request failed with status code 500".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_deletes_map_to_their_outcomes() {
        let backend = FakeBackend::new();
        assert_eq!(
            execute(Effect::DeleteTodo("1".to_string()), &backend).await,
            Some(Action::TodoDeleted)
        );
        assert_eq!(
            execute(Effect::DeleteOwner("o".to_string()), &backend).await,
            Some(Action::OwnerDeleted)
        );
        assert_eq!(
            backend.calls(),
            vec![
                Call::DeleteTodo("1".to_string()),
                Call::DeleteOwner("o".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_non_request_effects_do_nothing() {
        let backend = FakeBackend::new();
        assert_eq!(execute(Effect::None, &backend).await, None);
        assert_eq!(execute(Effect::Quit, &backend).await, None);
        assert!(backend.calls().is_empty());
    }
}
