//! HTTP surface of the wedding planner.
//!
//! Routes live under `/api/v1` and always answer with an [`ApiResponse`]
//! envelope whose `status` field matches the HTTP status code.

mod cards;
mod error;
mod response;
mod state;
mod todos;
mod users;

pub use error::ApiError;
pub use response::ApiResponse;
pub use state::{AppState, DynAccountService, DynCardService, DynTodoService};

use axum::{
    Router,
    routing::{get, post},
};

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/users/sign-up", post(users::sign_up))
        .route("/users/login", post(users::login))
        .route("/cards", post(cards::create_card).get(cards::list_cards))
        .route(
            "/cards/{card_id}",
            get(cards::read_card)
                .patch(cards::update_card)
                .delete(cards::delete_card),
        )
        .route(
            "/cards/{card_id}/todos",
            post(todos::create_todo).get(todos::list_todos),
        )
        .route(
            "/cards/{card_id}/todos/{todo_id}",
            get(todos::read_todo)
                .patch(todos::update_todo)
                .delete(todos::delete_todo),
        );

    Router::new().nest("/api/v1", api).with_state(state)
}
