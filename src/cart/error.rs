use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::cart::sessions::InvalidSessionHeader;
use crate::validation::ValidationError;

/// Error types for cart operations
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(ValidationError),

    #[error(transparent)]
    InvalidSession(#[from] InvalidSessionHeader),
}

impl From<ValidationError> for CartError {
    fn from(err: ValidationError) -> Self {
        CartError::InvalidQuantity(err)
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            CartError::BookNotFound(title) => {
                (StatusCode::NOT_FOUND, format!("Book not found: {}", title))
            }
            CartError::InvalidQuantity(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CartError::InvalidSession(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
