//! Shared handler state wiring services to their adapters.

use std::sync::Arc;

use crate::card::{
    adapters::{memory::InMemoryCardRepository, postgres::PostgresCardRepository},
    ports::CardRepository,
    services::CardService,
};
use crate::persistence::PgPool;
use crate::todo::{
    adapters::{memory::InMemoryTodoRepository, postgres::PostgresTodoRepository},
    ports::TodoRepository,
    services::TodoService,
};
use crate::user::{
    adapters::{memory::InMemoryUserRepository, postgres::PostgresUserRepository},
    ports::UserRepository,
    services::AccountService,
};
use mockable::DefaultClock;

/// Todo service over any repository implementation.
pub type DynTodoService = TodoService<dyn TodoRepository>;
/// Card service over any repository implementation.
pub type DynCardService = CardService<dyn CardRepository, DefaultClock>;
/// Account service over any repository implementation.
pub type DynAccountService = AccountService<dyn UserRepository, DefaultClock>;

/// Services shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub(super) accounts: DynAccountService,
    pub(super) cards: DynCardService,
    pub(super) todos: DynTodoService,
}

impl AppState {
    /// Wires services to the given repositories.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserRepository>,
        cards: Arc<dyn CardRepository>,
        todos: Arc<dyn TodoRepository>,
    ) -> Self {
        let clock = Arc::new(DefaultClock);
        Self {
            accounts: AccountService::new(users, Arc::clone(&clock)),
            cards: CardService::new(cards, clock),
            todos: TodoService::new(todos),
        }
    }

    /// Wires services to fresh in-memory repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryCardRepository::new()),
            Arc::new(InMemoryTodoRepository::new()),
        )
    }

    /// Wires services to `PostgreSQL` repositories sharing one pool.
    #[must_use]
    pub fn postgres(pool: &PgPool) -> Self {
        Self::new(
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresCardRepository::new(pool.clone())),
            Arc::new(PostgresTodoRepository::new(pool.clone())),
        )
    }
}
