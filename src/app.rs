//! Todo List App
//!
//! Wires the session, the store and the presenter together.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_sync::{HttpTodoClient, ListPresenter};

use crate::components::{EditSlideout, TodoList};
use crate::config;
use crate::context::SessionContext;
use crate::dialog::AlertAcknowledger;
use crate::store::{StoreCollection, StoreEditPanel, TodoState};

pub type TodoPresenter =
    ListPresenter<HttpTodoClient, StoreCollection, AlertAcknowledger, StoreEditPanel>;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(TodoState::default());
    provide_context(store);

    let session = SessionContext::from_local_storage();
    session.follow_storage_events();
    provide_context(session);

    let client_config = match config::client_config() {
        Ok(client_config) => client_config,
        Err(err) => {
            tracing::error!(error = %err, "todo API is misconfigured");
            return view! { <p class="config-error">{err.to_string()}</p> }.into_any();
        }
    };
    tracing::info!(base_url = %client_config.base_url(), "todo API configured");

    let presenter: Arc<TodoPresenter> = Arc::new(ListPresenter::new(
        HttpTodoClient::new(client_config),
        StoreCollection(store),
        AlertAcknowledger,
        StoreEditPanel(store),
    ));

    // Load on mount and again whenever the credentials change
    let loader = presenter.clone();
    Effect::new(move |_| {
        let identity = session.snapshot();
        let presenter = loader.clone();
        spawn_local(async move {
            presenter.refresh(&identity).await;
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <TodoList presenter=presenter />
            </main>
            <EditSlideout />
        </div>
    }
    .into_any()
}
