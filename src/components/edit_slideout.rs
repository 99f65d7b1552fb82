//! Edit Slideout Component
//!
//! Side panel hosting the todo selected for editing. Opened by the list,
//! closed from here.

use leptos::prelude::*;

use crate::store::{store_close_edit_panel, use_todo_store, TodoStateStoreFields};

#[component]
pub fn EditSlideout() -> impl IntoView {
    let store = use_todo_store();

    let is_open = move || store.edit_panel().with(|panel| panel.open);
    let selected = move || store.edit_panel().with(|panel| panel.selected.clone());

    view! {
        <aside class=move || if is_open() { "edit-slideout open" } else { "edit-slideout" }>
            <div class="edit-slideout-header">
                <h2>"Edit todo"</h2>
                <button class="close-btn" on:click=move |_| store_close_edit_panel(&store)>"×"</button>
            </div>
            {move || selected().map(|item| view! {
                <dl class="edit-slideout-fields">
                    <dt>"Heading"</dt>
                    <dd>{item.heading}</dd>
                    <dt>"Message"</dt>
                    <dd>{item.message}</dd>
                    <dt>"Category"</dt>
                    <dd>{item.category}</dd>
                    <dt>"Due date"</dt>
                    <dd>{item.due_date}</dd>
                    <dt>"Completed"</dt>
                    <dd>{if item.is_completed { "Yes" } else { "No" }}</dd>
                </dl>
            })}
        </aside>
    }
}
