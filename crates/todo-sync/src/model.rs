//! Todo Models
//!
//! Data structures matching the backend's JSON.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend-assigned item identifier (opaque)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub String);

impl TodoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single todo (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: TodoId,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub category: String,
    /// Display-only, passed through as the backend formats it
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub is_completed: bool,
}

/// Credentials of the signed-in user, owned by the auth component.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SessionIdentity {
    pub access_token: String,
    pub user_id: String,
}

impl SessionIdentity {
    pub fn new(access_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            user_id: user_id.into(),
        }
    }
}

impl fmt::Debug for SessionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionIdentity")
            .field("access_token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Uniform response body of every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    pub success: bool,
    #[serde(default)]
    pub response: Value,
}
