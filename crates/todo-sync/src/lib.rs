//! Todo Sync
//!
//! Remote todo store client and the state synchronization between that
//! store and the local list view. Platform-neutral: the same code runs in
//! the browser (wasm32) and in native tests.

pub mod config;
mod error;
mod http;
mod model;
mod presenter;
mod remote;
mod state;

pub use config::{ClientConfig, ConfigError};
pub use error::{ErrorPayload, SyncError, SyncResult};
pub use http::HttpTodoClient;
pub use model::{ApiEnvelope, SessionIdentity, TodoId, TodoItem};
pub use presenter::{Acknowledger, EditPanel, ListPresenter, Notice, TodoCollection};
pub use remote::RemoteStore;
pub use state::{ListLayout, Transition, ViewState};
