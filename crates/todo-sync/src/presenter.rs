//! List Presenter
//!
//! Dispatches user actions to the remote store and commits the confirmed
//! outcome to the local collection. Nothing is changed locally before the
//! backend has answered.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::model::{SessionIdentity, TodoId, TodoItem};
use crate::remote::RemoteStore;
use crate::state::Transition;

/// Handle to the item collection the view renders from.
pub trait TodoCollection {
    /// Apply one transition as a single update.
    fn apply(&self, transition: Transition);
}

/// Message the user has to acknowledge before the view moves on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Deleted,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Deleted => "Deleted!",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Notice::Deleted => "Your todo is deleted.",
        }
    }
}

#[async_trait(?Send)]
pub trait Acknowledger {
    /// Resolves once the user has dismissed the notice.
    async fn acknowledge(&self, notice: Notice);
}

/// External edit panel
pub trait EditPanel {
    /// Select `item` and open the panel in one update.
    fn open_with(&self, item: TodoItem);
}

pub struct ListPresenter<R, C, A, E> {
    remote: R,
    collection: C,
    acknowledger: A,
    edit_panel: E,
    /// Bumped by every refresh; only the latest refresh may commit.
    generation: AtomicU64,
}

impl<R, C, A, E> ListPresenter<R, C, A, E>
where
    R: RemoteStore,
    C: TodoCollection,
    A: Acknowledger,
    E: EditPanel,
{
    pub fn new(remote: R, collection: C, acknowledger: A, edit_panel: E) -> Self {
        Self {
            remote,
            collection,
            acknowledger,
            edit_panel,
            generation: AtomicU64::new(0),
        }
    }

    /// Replace the collection with the backend's current list.
    ///
    /// Run on mount and whenever the session identity changes. A response
    /// that arrives after a newer refresh started is dropped.
    pub async fn refresh(&self, session: &SessionIdentity) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, user_id = %session.user_id, "refreshing todo list");

        let outcome = self.remote.fetch_list(session).await;

        let current = self.generation.load(Ordering::SeqCst);
        if current != generation {
            debug!(generation, current, "dropping stale todo list response");
            return;
        }

        match outcome {
            Ok(items) => {
                info!(count = items.len(), "todo list loaded");
                self.collection.apply(Transition::Loaded(items));
            }
            Err(err) => {
                warn!(error = %err, "todo list fetch failed");
                self.collection.apply(Transition::LoadFailed(err));
            }
        }
    }

    /// Delete remotely, wait for the user to acknowledge, then drop the
    /// item locally.
    ///
    /// A failure clears the list, unless a refresh started meanwhile: that
    /// list belongs to the newer session and is kept.
    pub async fn delete(&self, todo_id: &TodoId, session: &SessionIdentity) {
        let generation = self.generation.load(Ordering::SeqCst);

        match self.remote.delete_item(todo_id, session).await {
            Ok(()) => {
                debug!(%todo_id, "todo deleted remotely");
                self.acknowledger.acknowledge(Notice::Deleted).await;
                self.collection.apply(Transition::Deleted(todo_id.clone()));
            }
            Err(err) => {
                warn!(%todo_id, error = %err, "todo delete failed");
                let current = self.generation.load(Ordering::SeqCst);
                if current != generation {
                    debug!(generation, current, "dropping stale todo delete failure");
                    return;
                }
                self.collection.apply(Transition::DeleteFailed(err));
            }
        }
    }

    pub async fn toggle(&self, todo_id: &TodoId, current_is_completed: bool) {
        match self.remote.toggle_completion(todo_id, current_is_completed).await {
            Ok(()) => {
                debug!(%todo_id, completed = !current_is_completed, "todo completion toggled");
                self.collection.apply(Transition::Toggled(todo_id.clone()));
            }
            Err(err) => {
                warn!(%todo_id, error = %err, "todo toggle failed");
                self.collection.apply(Transition::ToggleFailed(err));
            }
        }
    }

    pub fn request_edit(&self, item: TodoItem) {
        debug!(todo_id = %item.id, "opening edit panel");
        self.edit_panel.open_with(item);
    }
}
