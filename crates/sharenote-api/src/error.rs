use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every handler failure maps to one of these; nothing reaches the transport
/// layer unhandled. All responses carry a JSON `{ msg }` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid Authentication")]
    MissingCredential,
    #[error("Authorization not valid.")]
    InvalidCredential,
    #[error("The email already exists.")]
    DuplicateEmail,
    #[error("User does not exist.")]
    UserNotFound,
    #[error("Incorrect password.")]
    IncorrectPassword,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Internal(err) => {
                error!("internal fault: {:#}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "msg": self.to_string() }))).into_response()
    }
}
