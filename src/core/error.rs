use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Single-message validation failure.
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(vec![msg.into()])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, messages) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, vec![msg]),
            AppError::Validation(msgs) => (StatusCode::BAD_REQUEST, msgs),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, vec![msg]),
            // Credential and registration failures surface as 400 so the
            // response does not reveal which part of the input was wrong.
            AppError::Auth(msg) => (StatusCode::BAD_REQUEST, vec![msg]),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, vec![msg]),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, vec![msg]),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, vec![msg]),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, vec![msg])
            }
        };

        let body = Json(ApiResponse::<()>::error(status.as_u16(), messages));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
