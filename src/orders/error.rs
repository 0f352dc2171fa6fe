use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Cannot create an order with no items")]
    EmptyOrder,

    #[error("Order total cannot be negative")]
    NegativeTotal,

    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid order status: {0}")]
    InvalidStatus(String),

    #[error("{0}")]
    InvalidTransition(String),
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match &self {
            OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            OrderError::InvalidTransition(_) => StatusCode::CONFLICT,
            OrderError::EmptyOrder
            | OrderError::NegativeTotal
            | OrderError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
