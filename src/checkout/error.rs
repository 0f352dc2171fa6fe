use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::cart::sessions::InvalidSessionHeader;
use crate::error::ApiError;
use crate::orders::OrderError;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cannot checkout with an empty cart")]
    EmptyCart,

    #[error(transparent)]
    InvalidSession(#[from] InvalidSessionHeader),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Payment failed: {0}")]
    InvalidPayment(String),

    #[error("Payment failed: {0}")]
    PaymentDeclined(String),

    #[error(transparent)]
    Order(#[from] OrderError),
}

impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        let status = match &self {
            CheckoutError::PaymentDeclined(_) => StatusCode::PAYMENT_REQUIRED,
            CheckoutError::Order(err) => return err_response(err),
            _ => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn err_response(err: &OrderError) -> Response {
    // Ledger rejections during checkout are contract violations, not user
    // input problems.
    ApiError::InternalError(err.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = CheckoutError::MissingField("zip_code".to_string());
        assert_eq!(err.to_string(), "Missing required field: zip_code");
    }

    #[test]
    fn test_declined_maps_to_402() {
        let resp = CheckoutError::PaymentDeclined("Invalid card number".into()).into_response();
        assert_eq!(resp.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        for err in [
            CheckoutError::EmptyCart,
            CheckoutError::MissingField("name".into()),
            CheckoutError::InvalidEmail,
            CheckoutError::InvalidPayment("Invalid payment method".into()),
            CheckoutError::InvalidSession(InvalidSessionHeader),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_ledger_error_maps_to_500() {
        let resp = CheckoutError::Order(OrderError::EmptyOrder).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
