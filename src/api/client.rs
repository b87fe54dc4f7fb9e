//! `reqwest` implementation of `TodoBackend`.
//!
//! All six operations go through two helpers: `get_json` for the list
//! endpoints and `send_json` for the mutations. Mutation responses are read
//! for error reporting but never decoded.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::backend::{ApiError, TodoBackend};
use super::types::{CreateTodo, DeleteById, OwnerRecord, TodoRecord, UpdateTodo};

pub const TODO_PATH: &str = "/api/todo";
pub const OWNER_PATH: &str = "/api/todo/owner";

/// Backend reached over HTTP at `base_url`.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(Method::GET, &url, response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        debug!("GET {} returned {} bytes", url, body.len());

        serde_json::from_str(&body).map_err(|e| {
            warn!("GET {} returned an unexpected body: {}", url, e);
            ApiError::Decode(e.to_string())
        })
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.url(path);
        info!("{} {}", method, url);

        let response = self
            .client
            .request(method.clone(), &url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(method, &url, response).await?;
        Ok(())
    }
}

/// Turns any non-2xx response into `ApiError::Api`, carrying the body text.
async fn check_status(
    method: Method,
    url: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    debug!("{} {} -> {}", method, url, status);
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    warn!("{} {} failed: {} - {}", method, url, status.as_u16(), message);
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl TodoBackend for HttpBackend {
    async fn list_todos(&self) -> Result<Vec<TodoRecord>, ApiError> {
        self.get_json(TODO_PATH).await
    }

    async fn list_owners(&self) -> Result<Vec<OwnerRecord>, ApiError> {
        self.get_json(OWNER_PATH).await
    }

    async fn create_todo(&self, todo_text: &str) -> Result<(), ApiError> {
        self.send_json(Method::PUT, TODO_PATH, &CreateTodo { todo_text })
            .await
    }

    async fn update_todo(&self, id: &str, todo_text: &str) -> Result<(), ApiError> {
        self.send_json(Method::PATCH, TODO_PATH, &UpdateTodo { id, todo_text })
            .await
    }

    async fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        self.send_json(Method::DELETE, TODO_PATH, &DeleteById { id })
            .await
    }

    async fn delete_owner(&self, id: &str) -> Result<(), ApiError> {
        self.send_json(Method::DELETE, OWNER_PATH, &DeleteById { id })
            .await
    }
}
