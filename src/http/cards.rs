//! Card endpoints.

use super::{ApiError, ApiResponse, AppState};
use crate::card::{
    domain::{Card, CardId, CardStatus},
    services::{CreateCardCommand, UpdateCardCommand},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct CreateCardBody {
    title: String,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct UpdateCardBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    status: Option<CardStatus>,
}

pub(super) async fn create_card(
    State(state): State<AppState>,
    Json(body): Json<CreateCardBody>,
) -> Result<ApiResponse<Card>, ApiError> {
    let card = state
        .cards
        .create_card(CreateCardCommand::new(body.title))
        .await?;
    Ok(ApiResponse::with_data(
        StatusCode::CREATED,
        "card created",
        card,
    ))
}

pub(super) async fn list_cards(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Card>>, ApiError> {
    let cards = state.cards.list_cards().await?;
    Ok(ApiResponse::with_data(StatusCode::OK, "cards listed", cards))
}

pub(super) async fn read_card(
    State(state): State<AppState>,
    Path(card_id): Path<CardId>,
) -> Result<ApiResponse<Card>, ApiError> {
    let card = state.cards.find_card(card_id).await?;
    Ok(ApiResponse::with_data(StatusCode::OK, "card found", card))
}

pub(super) async fn update_card(
    State(state): State<AppState>,
    Path(card_id): Path<CardId>,
    Json(body): Json<UpdateCardBody>,
) -> Result<ApiResponse<Card>, ApiError> {
    let mut command = UpdateCardCommand::new(card_id);
    if let Some(title) = body.title {
        command = command.with_title(title);
    }
    if let Some(status) = body.status {
        command = command.with_status(status);
    }
    let card = state.cards.update_card(command).await?;
    Ok(ApiResponse::with_data(StatusCode::OK, "card updated", card))
}

pub(super) async fn delete_card(
    State(state): State<AppState>,
    Path(card_id): Path<CardId>,
) -> Result<ApiResponse<()>, ApiError> {
    state.cards.delete_card(card_id).await?;
    state.todos.delete_all_for_card(card_id).await?;
    Ok(ApiResponse::message(StatusCode::OK, "card deleted"))
}
