//! Todo endpoints nested under a card.
//!
//! Every handler confirms the card exists before touching its todos, so an
//! unknown card answers 404 even when the todo operation would not.

use super::{ApiError, ApiResponse, AppState};
use crate::card::domain::CardId;
use crate::todo::{
    domain::{CheckStatus, TodoId},
    services::{
        CreateTodoCommand, DeleteTodoCommand, ReadTodoCommand, TodoDto, UpdateTodoCommand,
    },
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct CreateTodoBody {
    item: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateTodoBody {
    #[serde(default)]
    item: Option<String>,
    #[serde(default)]
    check_status: Option<CheckStatus>,
}

async fn guard_card(state: &AppState, card_id: CardId) -> Result<(), ApiError> {
    state.cards.check_card_existence(card_id).await?;
    Ok(())
}

pub(super) async fn create_todo(
    State(state): State<AppState>,
    Path(card_id): Path<CardId>,
    Json(body): Json<CreateTodoBody>,
) -> Result<ApiResponse<()>, ApiError> {
    guard_card(&state, card_id).await?;
    state
        .todos
        .create_todo(CreateTodoCommand::new(card_id, body.item))
        .await?;
    Ok(ApiResponse::message(StatusCode::CREATED, "todo created"))
}

pub(super) async fn list_todos(
    State(state): State<AppState>,
    Path(card_id): Path<CardId>,
) -> Result<ApiResponse<Vec<TodoDto>>, ApiError> {
    guard_card(&state, card_id).await?;
    let todos = state.todos.get_all_todos(card_id).await?;
    Ok(ApiResponse::with_data(StatusCode::OK, "todos listed", todos))
}

pub(super) async fn read_todo(
    State(state): State<AppState>,
    Path((card_id, todo_id)): Path<(CardId, TodoId)>,
) -> Result<ApiResponse<TodoDto>, ApiError> {
    guard_card(&state, card_id).await?;
    let todo = state
        .todos
        .read_todo(ReadTodoCommand::new(card_id, todo_id))
        .await?;
    Ok(ApiResponse::with_data(StatusCode::OK, "todo found", todo))
}

pub(super) async fn update_todo(
    State(state): State<AppState>,
    Path((card_id, todo_id)): Path<(CardId, TodoId)>,
    Json(body): Json<UpdateTodoBody>,
) -> Result<ApiResponse<TodoDto>, ApiError> {
    guard_card(&state, card_id).await?;
    let todo = state
        .todos
        .update_todo(UpdateTodoCommand::new(
            card_id,
            todo_id,
            body.item,
            body.check_status,
        ))
        .await?;
    Ok(ApiResponse::with_data(StatusCode::OK, "todo updated", todo))
}

pub(super) async fn delete_todo(
    State(state): State<AppState>,
    Path((card_id, todo_id)): Path<(CardId, TodoId)>,
) -> Result<ApiResponse<()>, ApiError> {
    guard_card(&state, card_id).await?;
    state
        .todos
        .delete_todo(DeleteTodoCommand::new(card_id, todo_id))
        .await?;
    Ok(ApiResponse::message(StatusCode::OK, "todo deleted"))
}
