use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("User not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    WeakPassword,

    #[error("{0}")]
    Invalid(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match &self {
            UserError::EmailTaken => StatusCode::CONFLICT,
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        if matches!(self, UserError::PasswordHash(_)) {
            tracing::error!(error = %self, "Password hashing failure");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            UserError::EmailTaken.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            UserError::NotFound("x@y.com".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            UserError::WeakPassword.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
