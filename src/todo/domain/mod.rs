//! Domain model for todo items.

mod check_status;
mod error;
mod ids;
mod item;
mod todo;

pub use check_status::CheckStatus;
pub use error::{ParseCheckStatusError, TodoDomainError, TodoErrorCode, TodoException};
pub use ids::TodoId;
pub use item::TodoItem;
pub use todo::{NewTodo, PersistedTodoData, Todo};
