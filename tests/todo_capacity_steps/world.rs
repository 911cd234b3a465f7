//! Shared world state for todo capacity BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use wedding::card::{adapters::memory::InMemoryCardRepository, domain::CardId, services::CardService};
use wedding::todo::{
    adapters::memory::InMemoryTodoRepository,
    services::{TodoDto, TodoService, TodoServiceResult},
};

/// Card service type used by the BDD world.
pub type TestCardService = CardService<InMemoryCardRepository, DefaultClock>;

/// Todo service type used by the BDD world.
pub type TestTodoService = TodoService<InMemoryTodoRepository>;

/// Scenario world for todo capacity behaviour tests.
pub struct TodoWorld {
    pub cards: TestCardService,
    pub todos: TestTodoService,
    pub card_id: Option<CardId>,
    pub last_create_result: Option<TodoServiceResult<()>>,
    pub last_list_result: Option<TodoServiceResult<Vec<TodoDto>>>,
}

impl TodoWorld {
    /// Creates a world backed by empty in-memory repositories.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: CardService::new(
                Arc::new(InMemoryCardRepository::new()),
                Arc::new(DefaultClock),
            ),
            todos: TodoService::new(Arc::new(InMemoryTodoRepository::new())),
            card_id: None,
            last_create_result: None,
            last_list_result: None,
        }
    }

    /// Returns the card created by the scenario.
    pub fn card_id(&self) -> Result<CardId, eyre::Report> {
        self.card_id
            .ok_or_else(|| eyre::eyre!("missing card in scenario world"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
