//! Application services for per-card todo lists.

mod command;
mod dto;
mod lifecycle;

pub use command::{CreateTodoCommand, DeleteTodoCommand, ReadTodoCommand, UpdateTodoCommand};
pub use dto::TodoDto;
pub use lifecycle::{TodoService, TodoServiceError, TodoServiceResult};
