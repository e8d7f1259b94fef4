//! Core todo list logic: the entry model and the list state machine, with no
//! knowledge of rendering.

mod item;
mod list;

pub use item::{Place, Todo};
pub use list::{TodoConfig, TodoError, TodoList};
