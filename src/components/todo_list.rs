//! Todo List Component
//!
//! Renders the populated list or the empty placeholder and turns clicks
//! into presenter calls.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{ListLayout, TodoId, TodoItem};

use crate::app::TodoPresenter;
use crate::components::{EmptyTodo, TodoCard};
use crate::context::SessionContext;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoList(presenter: Arc<TodoPresenter>) -> impl IntoView {
    let store = use_todo_store();
    let session = expect_context::<SessionContext>();

    let on_toggle = {
        let presenter = presenter.clone();
        Callback::new(move |(id, completed): (TodoId, bool)| {
            let presenter = presenter.clone();
            spawn_local(async move {
                presenter.toggle(&id, completed).await;
            });
        })
    };

    let on_delete = {
        let presenter = presenter.clone();
        Callback::new(move |id: TodoId| {
            let presenter = presenter.clone();
            let identity = session.snapshot_untracked();
            spawn_local(async move {
                presenter.delete(&id, &identity).await;
            });
        })
    };

    let on_edit = Callback::new(move |item: TodoItem| presenter.request_edit(item));

    let populated = move || store.view().with(|view| view.layout() == ListLayout::Populated);
    let items = move || store.view().with(|view| view.items.clone());
    let error = move || store.view().with(|view| view.error.as_ref().map(|err| err.to_string()));

    view! {
        <section class="list-wrapper">
            <h2>"Your todos"</h2>

            {move || error().map(|message| view! { <p class="todo-error" role="alert">{message}</p> })}

            <Show
                when=populated
                fallback=|| view! {
                    <div class="card-wrapper">
                        <EmptyTodo />
                    </div>
                }
            >
                // Completion is part of the key so a toggle re-renders the card
                <For
                    each=items
                    key=|item| (item.id.clone(), item.is_completed)
                    children=move |item| {
                        view! {
                            <TodoCard
                                item=item
                                on_toggle=on_toggle
                                on_delete=on_delete
                                on_edit=on_edit
                            />
                        }
                    }
                />
            </Show>
        </section>
    }
}
