use leptos::prelude::*;

/// Placeholder shown when the list has no items
#[component]
pub fn EmptyTodo() -> impl IntoView {
    view! {
        <div class="empty-todo">
            <p class="empty-todo-title">"Nothing to do here"</p>
            <p class="empty-todo-text">"Add a todo and it will show up in this list."</p>
        </div>
    }
}
