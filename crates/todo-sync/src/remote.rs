//! Remote Store - Core Trait
//!
//! The three calls the list view makes against the todo backend.
//! `?Send` because in the browser the futures live on the UI event loop.

use async_trait::async_trait;

use crate::error::SyncResult;
use crate::model::{SessionIdentity, TodoId, TodoItem};

#[async_trait(?Send)]
pub trait RemoteStore {
    /// All todos of the session's user, in backend order
    async fn fetch_list(&self, session: &SessionIdentity) -> SyncResult<Vec<TodoItem>>;

    /// Delete one todo owned by the session's user
    async fn delete_item(&self, todo_id: &TodoId, session: &SessionIdentity) -> SyncResult<()>;

    /// Set completion to the negation of `current_is_completed`.
    /// Sent without credentials.
    async fn toggle_completion(&self, todo_id: &TodoId, current_is_completed: bool) -> SyncResult<()>;
}
