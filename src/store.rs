//! Todo View Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The presenter
//! writes through `StoreCollection` / `StoreEditPanel`; components only read.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{EditPanel, TodoCollection, TodoItem, Transition, ViewState};

/// Edit slideout visibility and the item it shows
#[derive(Clone, Debug, Default)]
pub struct EditPanelState {
    pub selected: Option<TodoItem>,
    pub open: bool,
}

#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Items + last error mirrored from the backend
    pub view: ViewState,
    pub edit_panel: EditPanelState,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Presenter Handles
// ========================

#[derive(Clone, Copy)]
pub struct StoreCollection(pub TodoStore);

impl TodoCollection for StoreCollection {
    fn apply(&self, transition: Transition) {
        // One write guard, one notification
        self.0.view().write().apply(transition);
    }
}

#[derive(Clone, Copy)]
pub struct StoreEditPanel(pub TodoStore);

impl EditPanel for StoreEditPanel {
    fn open_with(&self, item: TodoItem) {
        let binding = self.0.edit_panel();
        let mut panel = binding.write();
        panel.selected = Some(item);
        panel.open = true;
    }
}

// ========================
// Store Helper Functions
// ========================

pub fn store_close_edit_panel(store: &TodoStore) {
    store.edit_panel().write().open = false;
}
