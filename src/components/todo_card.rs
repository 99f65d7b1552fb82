//! Todo Card Component
//!
//! One todo with its delete / edit buttons and completion checkbox.

use leptos::prelude::*;
use todo_sync::{TodoId, TodoItem};

/// A single todo card
///
/// # Arguments
/// * `on_toggle` - Receives the id and the completion state *before* the toggle
/// * `on_delete` - Receives the id to delete
/// * `on_edit` - Receives the whole item for the edit slideout
#[component]
pub fn TodoCard(
    item: TodoItem,
    #[prop(into)] on_toggle: Callback<(TodoId, bool)>,
    #[prop(into)] on_delete: Callback<TodoId>,
    #[prop(into)] on_edit: Callback<TodoItem>,
) -> impl IntoView {
    let completed = item.is_completed;
    let checkbox_id = item.id.to_string();
    let delete_id = item.id.clone();
    let toggle_id = item.id.clone();
    let edit_item = item.clone();

    view! {
        <article class=if completed { "card-wrapper completed" } else { "card-wrapper" }>
            <div class="category-wrapper">
                <span class="label">"Category"</span>
                <span class="category">{item.category}</span>
            </div>
            <h3 class="todo-subject">{item.heading}</h3>
            <p class="todo-text">{item.message}</p>
            <p class="todo-text">{format!("Due date {}", item.due_date)}</p>

            <div class="bottom-container">
                <div class="left-wrapper">
                    <button
                        class="delete-btn"
                        title="Delete"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_delete.run(delete_id.clone());
                        }
                    >
                        "🗑"
                    </button>
                    <button
                        class="edit-btn"
                        title="Edit"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_edit.run(edit_item.clone());
                        }
                    >
                        "✎"
                    </button>
                </div>

                <label class="checkbox-label" for=checkbox_id.clone()>
                    "Completed"
                    <span class="complete-icon">{if completed { "✓" } else { "?" }}</span>
                    <input
                        type="checkbox"
                        class="checkbox"
                        id=checkbox_id.clone()
                        name=checkbox_id.clone()
                        prop:checked=completed
                        on:change=move |_| on_toggle.run((toggle_id.clone(), completed))
                    />
                </label>
            </div>
        </article>
    }
}
