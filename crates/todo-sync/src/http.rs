//! HTTP Remote Store
//!
//! `RemoteStore` over the todo REST API using reqwest (fetch on wasm32).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Request};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ErrorPayload, SyncError, SyncResult};
use crate::model::{ApiEnvelope, SessionIdentity, TodoId, TodoItem};
use crate::remote::RemoteStore;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct DeleteBody<'a> {
    user: &'a str,
}

#[derive(Serialize)]
struct ToggleBody<'a> {
    #[serde(rename = "isCompleted")]
    is_completed: bool,
    #[serde(rename = "_id")]
    id: &'a str,
}

pub struct HttpTodoClient {
    client: Client,
    config: ClientConfig,
}

impl HttpTodoClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    // ========================
    // Request Builders
    // ========================

    fn list_request(&self, session: &SessionIdentity) -> SyncResult<Request> {
        let url = self.config.endpoint(&format!("todos/{}", segment(&session.user_id)));
        Ok(self
            .client
            .get(url)
            .header(AUTHORIZATION, session.access_token.as_str())
            .build()?)
    }

    fn delete_request(&self, todo_id: &TodoId, session: &SessionIdentity) -> SyncResult<Request> {
        let url = self.config.endpoint(&format!("todos/{}", segment(todo_id.as_str())));
        Ok(self
            .client
            .delete(url)
            .header(AUTHORIZATION, session.access_token.as_str())
            .json(&DeleteBody { user: &session.user_id })
            .build()?)
    }

    fn toggle_request(&self, todo_id: &TodoId, current_is_completed: bool) -> SyncResult<Request> {
        let url = self.config.endpoint(&format!("todo/{}/completed", segment(todo_id.as_str())));
        Ok(self
            .client
            .patch(url)
            .json(&ToggleBody {
                is_completed: !current_is_completed,
                id: todo_id.as_str(),
            })
            .build()?)
    }

    /// Execute and unwrap the `{success, response}` envelope.
    ///
    /// The backend reports failures in-band, so the HTTP status is only
    /// used for diagnostics.
    async fn send(&self, request: Request) -> SyncResult<Value> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending todo request");

        let response = self.client.execute(request).await.map_err(|e| {
            warn!(%method, %url, error = %e, "todo request failed");
            SyncError::from(e)
        })?;

        let status = response.status();
        let envelope: ApiEnvelope = response.json().await.map_err(|e| {
            warn!(%method, %url, %status, error = %e, "todo response is not an envelope");
            SyncError::Decode(format!("HTTP {}: {}", status, e))
        })?;

        unwrap_envelope(envelope)
    }
}

fn unwrap_envelope(envelope: ApiEnvelope) -> SyncResult<Value> {
    if envelope.success {
        Ok(envelope.response)
    } else {
        Err(SyncError::Rejected(ErrorPayload(envelope.response)))
    }
}

#[async_trait(?Send)]
impl RemoteStore for HttpTodoClient {
    async fn fetch_list(&self, session: &SessionIdentity) -> SyncResult<Vec<TodoItem>> {
        let request = self.list_request(session)?;
        let response = self.send(request).await?;
        Ok(serde_json::from_value(response)?)
    }

    async fn delete_item(&self, todo_id: &TodoId, session: &SessionIdentity) -> SyncResult<()> {
        let request = self.delete_request(todo_id, session)?;
        self.send(request).await.map(|_| ())
    }

    async fn toggle_completion(&self, todo_id: &TodoId, current_is_completed: bool) -> SyncResult<()> {
        let request = self.toggle_request(todo_id, current_is_completed)?;
        self.send(request).await.map(|_| ())
    }
}
