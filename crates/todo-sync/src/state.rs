//! List View State
//!
//! The local mirror of the remote collection plus the last error, and the
//! reducer that moves it between states.

use crate::error::SyncError;
use crate::model::{TodoId, TodoItem};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Items in the order the backend returned them
    pub items: Vec<TodoItem>,
    /// Last failure, cleared by the next successful call
    pub error: Option<SyncError>,
}

/// What the list renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLayout {
    Populated,
    Empty,
}

/// A confirmed outcome of a remote call, applied as one unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Loaded(Vec<TodoItem>),
    LoadFailed(SyncError),
    Deleted(TodoId),
    /// Clears the whole list, unlike `ToggleFailed`.
    DeleteFailed(SyncError),
    /// Flips the local flag rather than setting the value sent, so two
    /// overlapping toggles of one item can leave it out of step with the backend.
    Toggled(TodoId),
    ToggleFailed(SyncError),
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Loaded(items) => {
                self.items = items;
                self.error = None;
            }
            Transition::LoadFailed(err) | Transition::DeleteFailed(err) => {
                self.items.clear();
                self.error = Some(err);
            }
            Transition::Deleted(id) => {
                self.error = None;
                self.items.retain(|item| item.id != id);
            }
            Transition::Toggled(id) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.is_completed = !item.is_completed;
                }
                self.error = None;
            }
            Transition::ToggleFailed(err) => {
                self.error = Some(err);
            }
        }
    }

    /// Depends only on whether there are items; an error alone never hides
    /// a populated list.
    pub fn layout(&self) -> ListLayout {
        if self.items.is_empty() {
            ListLayout::Empty
        } else {
            ListLayout::Populated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorPayload;

    fn item(id: &str, is_completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId::from(id),
            heading: format!("Heading {}", id),
            message: String::new(),
            category: "Work".to_string(),
            due_date: "2024-01-01".to_string(),
            is_completed,
        }
    }

    fn ids(state: &ViewState) -> Vec<&str> {
        state.items.iter().map(|i| i.id.as_str()).collect()
    }

    fn rejected(msg: &str) -> SyncError {
        SyncError::Rejected(ErrorPayload::new(msg))
    }

    fn loaded(items: Vec<TodoItem>) -> ViewState {
        let mut state = ViewState::new();
        state.apply(Transition::Loaded(items));
        state
    }

    #[test]
    fn test_loaded_replaces_wholesale() {
        let mut state = loaded(vec![item("old", true)]);
        state.error = Some(rejected("stale"));

        state.apply(Transition::Loaded(vec![item("b", false), item("a", false)]));

        assert_eq!(ids(&state), vec!["b", "a"]);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_load_failed_empties_and_records() {
        let mut state = loaded(vec![item("1", false)]);
        state.apply(Transition::LoadFailed(rejected("unauthorized")));

        assert!(state.items.is_empty());
        assert_eq!(state.error, Some(rejected("unauthorized")));
    }

    #[test]
    fn test_deleted_keeps_order_of_rest() {
        let mut state = loaded(vec![item("1", false), item("2", false), item("3", false)]);
        state.error = Some(rejected("earlier"));

        state.apply(Transition::Deleted(TodoId::from("2")));

        assert_eq!(ids(&state), vec!["1", "3"]);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_delete_failed_empties_list() {
        let mut state = loaded(vec![item("1", false), item("2", false)]);
        state.apply(Transition::DeleteFailed(rejected("forbidden")));

        assert!(state.items.is_empty());
        assert_eq!(state.error, Some(rejected("forbidden")));
    }

    #[test]
    fn test_toggled_flips_only_target() {
        let mut state = loaded(vec![item("1", false), item("2", true), item("3", false)]);
        state.apply(Transition::Toggled(TodoId::from("2")));

        assert_eq!(ids(&state), vec!["1", "2", "3"]);
        let flags: Vec<bool> = state.items.iter().map(|i| i.is_completed).collect();
        assert_eq!(flags, vec![false, false, false]);
    }

    #[test]
    fn test_toggle_failed_keeps_items() {
        let before = vec![item("1", false), item("2", true)];
        let mut state = loaded(before.clone());
        state.apply(Transition::ToggleFailed(rejected("nope")));

        assert_eq!(state.items, before);
        assert_eq!(state.error, Some(rejected("nope")));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let before = vec![item("1", false)];
        let mut state = loaded(before.clone());
        state.apply(Transition::Toggled(TodoId::from("missing")));
        state.apply(Transition::Deleted(TodoId::from("missing")));

        assert_eq!(state.items, before);
    }

    #[test]
    fn test_layout_ignores_error() {
        let mut state = ViewState::new();
        assert_eq!(state.layout(), ListLayout::Empty);

        state.error = Some(rejected("boom"));
        assert_eq!(state.layout(), ListLayout::Empty);

        state.items.push(item("1", false));
        assert_eq!(state.layout(), ListLayout::Populated);
    }
}
