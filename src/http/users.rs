//! Account endpoints.

use super::{ApiError, ApiResponse, AppState};
use crate::user::{
    domain::{User, UserId},
    services::{LoginRequest, SignUpRequest},
};
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct SignUpBody {
    email: String,
    nickname: String,
    password: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginBody {
    email: String,
    password: String,
}

/// Public projection of an account; never carries the password digest.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserView {
    user_id: UserId,
    email: String,
    nickname: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id(),
            email: user.email().as_str().to_owned(),
            nickname: user.nickname().as_str().to_owned(),
        }
    }
}

pub(super) async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpBody>,
) -> Result<ApiResponse<UserView>, ApiError> {
    let user = state
        .accounts
        .sign_up(SignUpRequest::new(body.email, body.nickname, body.password))
        .await?;
    Ok(ApiResponse::with_data(
        StatusCode::CREATED,
        "sign-up completed",
        UserView::from(&user),
    ))
}

pub(super) async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<ApiResponse<UserView>, ApiError> {
    let user = state
        .accounts
        .login(LoginRequest::new(body.email, body.password))
        .await?;
    Ok(ApiResponse::with_data(
        StatusCode::OK,
        "login succeeded",
        UserView::from(&user),
    ))
}
