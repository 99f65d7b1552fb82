//! Sync Errors
//!
//! Everything a remote call can end in besides success. Errors are values
//! stored in the view state, so they are `Clone + PartialEq`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Opaque error body returned by the backend in `response` when
/// `success` is false. Never interpreted, only displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorPayload(pub Value);

impl ErrorPayload {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_value() {
            // Plain strings read better without the JSON quotes
            Value::String(s) => f.write_str(s),
            Value::Object(map) => match map.get("message").and_then(Value::as_str) {
                Some(message) => f.write_str(message),
                None => write!(f, "{}", self.as_value()),
            },
            other => write!(f, "{}", other),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    /// The call completed but the backend answered `success: false`.
    #[error("{0}")]
    Rejected(ErrorPayload),

    /// The request never produced a response (network, CORS, DNS, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// A response arrived but was not the expected envelope.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl SyncError {
    /// Payload of an in-band rejection, if this is one.
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            SyncError::Rejected(payload) => Some(payload),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SyncError::Decode(err.to_string())
        } else {
            SyncError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Decode(err.to_string())
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
