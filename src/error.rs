// Error handling module for the Bookstore API
// Provides centralized error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error};

/// Main error type for cross-cutting handler failures.
///
/// Domain modules (cart, checkout, orders, users) carry their own error
/// enums; this type covers the shared cases that do not belong to any one
/// of them.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found by identifier
    /// Maps to HTTP 404 Not Found
    NotFound { resource: String, id: String },

    /// Internal server errors
    /// Maps to HTTP 500 Internal Server Error
    /// Sensitive details are filtered from client responses
    InternalError(String),
}

/// Consistent error response structure
///
/// Provides both machine-readable (error_code) and human-readable (message)
/// information. Fields follow snake_case naming.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g., "NOT_FOUND", "INTERNAL_ERROR")
    pub error_code: String,

    /// Human-readable error message
    pub message: String,

    /// ISO 8601 timestamp of when the error occurred
    pub timestamp: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = self.to_error_response();
        (status, Json(error_response)).into_response()
    }
}

impl ApiError {
    /// Convert ApiError to HTTP status code and ErrorResponse
    ///
    /// Logging levels track severity: error! for 500s, debug! for expected
    /// client errors.
    fn to_error_response(&self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::NotFound { resource, id } => {
                debug!("Resource not found: {} {}", resource, id);

                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error_code: "NOT_FOUND".to_string(),
                        message: format!("{} '{}' not found", resource, id),
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
            ApiError::InternalError(internal_msg) => {
                // Logged in full internally, never exposed to the client
                error!("Internal error: {}", internal_msg);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred".to_string(),
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = ApiError::NotFound {
            resource: "Book".to_string(),
            id: "Unknown Title".to_string(),
        };
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let internal = ApiError::InternalError("boom".to_string());
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_names_resource() {
        let err = ApiError::NotFound {
            resource: "Book".to_string(),
            id: "Dune".to_string(),
        };
        let (_, response) = err.to_error_response();
        assert_eq!(response.error_code, "NOT_FOUND");
        assert_eq!(response.message, "Book 'Dune' not found");
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = ApiError::InternalError("ledger rejected order".to_string());
        let (_, response) = err.to_error_response();
        assert_eq!(response.error_code, "INTERNAL_ERROR");
        assert!(!response.message.contains("ledger"));
    }
}
