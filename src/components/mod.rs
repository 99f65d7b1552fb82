//! UI Components
//!
//! Leptos components of the todo list view.

mod edit_slideout;
mod empty_todo;
mod todo_card;
mod todo_list;

pub use edit_slideout::EditSlideout;
pub use empty_todo::EmptyTodo;
pub use todo_card::TodoCard;
pub use todo_list::TodoList;
