use std::fmt;

use async_trait::async_trait;

use super::types::{OwnerRecord, TodoRecord};

/// Errors that can occur talking to the backend.
///
/// The UI shows all of them the same way (the `Display` text in a blocking
/// notification); the variants exist for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure (connection refused, DNS, reset).
    Network(String),
    /// Backend answered with a non-2xx status. `message` is the response body.
    Api { status: u16, message: String },
    /// Response body did not match the expected records.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } if message.is_empty() => {
                write!(f, "request failed with status code {status}")
            }
            ApiError::Api { status, message } => {
                write!(f, "request failed with status code {status}: {message}")
            }
            ApiError::Decode(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The six operations the client needs from the backend.
///
/// Mutations report success only; the caller refetches to learn the new state.
#[async_trait]
pub trait TodoBackend: Send + Sync {
    async fn list_todos(&self) -> Result<Vec<TodoRecord>, ApiError>;

    async fn list_owners(&self) -> Result<Vec<OwnerRecord>, ApiError>;

    async fn create_todo(&self, todo_text: &str) -> Result<(), ApiError>;

    async fn update_todo(&self, id: &str, todo_text: &str) -> Result<(), ApiError>;

    async fn delete_todo(&self, id: &str) -> Result<(), ApiError>;

    async fn delete_owner(&self, id: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_api_error_with_body() {
        let err = ApiError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "request failed with status code 500: boom");
    }

    #[test]
    fn test_display_api_error_without_body() {
        let err = ApiError::Api {
            status: 404,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "request failed with status code 404");
    }

    #[test]
    fn test_display_network_and_decode() {
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
        assert!(ApiError::Decode("x".into()).to_string().starts_with("malformed response"));
    }
}
