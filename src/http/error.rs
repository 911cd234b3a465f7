//! Mapping of service errors onto HTTP responses.

use super::ApiResponse;
use crate::card::services::CardServiceError;
use crate::todo::{domain::TodoErrorCode, services::TodoServiceError};
use crate::user::services::AccountServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Any failure a handler can report.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Todo operation failed.
    #[error(transparent)]
    Todo(#[from] TodoServiceError),
    /// Card operation failed.
    #[error(transparent)]
    Card(#[from] CardServiceError),
    /// Account operation failed.
    #[error(transparent)]
    Account(#[from] AccountServiceError),
}

impl ApiError {
    /// Returns the HTTP status for the error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Todo(err) => match err {
                TodoServiceError::Todo(exception) => match exception.code() {
                    TodoErrorCode::CapacityExceeded => StatusCode::CONFLICT,
                    TodoErrorCode::NotFound => StatusCode::NOT_FOUND,
                },
                TodoServiceError::Domain(_) => StatusCode::BAD_REQUEST,
                TodoServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Card(err) => match err {
                CardServiceError::Domain(_) => StatusCode::BAD_REQUEST,
                CardServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                CardServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Account(err) => match err {
                AccountServiceError::Domain(_) => StatusCode::BAD_REQUEST,
                AccountServiceError::DuplicateEmail(_) => StatusCode::CONFLICT,
                AccountServiceError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AccountServiceError::Hashing(_) | AccountServiceError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_owned()
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
            self.to_string()
        };
        ApiResponse::message(status, message).into_response()
    }
}
