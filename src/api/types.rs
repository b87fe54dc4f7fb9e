//! Wire types for the todo backend.
//!
//! Field names follow the backend's JSON exactly (`todoText`, `createdAt`,
//! `Name`, `course_id`). Decoding is the validation boundary: a body that
//! does not fit these shapes becomes `ApiError::Decode` instead of leaking
//! half-typed data into the app.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    #[serde(deserialize_with = "scalar_id")]
    pub id: String,
    #[serde(rename = "todoText")]
    pub todo_text: String,
    /// Raw timestamp as sent by the backend. Empty when missing or null.
    #[serde(rename = "createdAt", default, deserialize_with = "lenient_text")]
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OwnerRecord {
    #[serde(deserialize_with = "scalar_id")]
    pub id: String,
    #[serde(rename = "Name", default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub course_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub section: String,
}

/// Body of `PUT /api/todo`.
#[derive(Serialize, Debug)]
pub struct CreateTodo<'a> {
    #[serde(rename = "todoText")]
    pub todo_text: &'a str,
}

/// Body of `PATCH /api/todo`.
#[derive(Serialize, Debug)]
pub struct UpdateTodo<'a> {
    pub id: &'a str,
    #[serde(rename = "todoText")]
    pub todo_text: &'a str,
}

/// Body of both `DELETE` endpoints.
#[derive(Serialize, Debug)]
pub struct DeleteById<'a> {
    pub id: &'a str,
}

/// Ids are opaque: accept a JSON string or number, keep it as a string.
fn scalar_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

/// Display-only text: strings pass through, numbers are stringified, null is empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string, number or null, got {other}"
        ))),
    }
}
