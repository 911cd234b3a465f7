//! In-memory todo adapters.

mod todo;

pub use todo::InMemoryTodoRepository;
