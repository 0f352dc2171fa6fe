use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A registered customer account.
///
/// `order_ids` are references into the order ledger; the ledger owns the
/// orders themselves.
#[derive(Debug, Clone)]
pub struct User {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub order_ids: Vec<Uuid>,
}

/// Request DTO for POST /api/users/register
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "demo@bookstore.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Demo User")]
    pub name: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Public view of an account, without credential material.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserView {
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
        }
    }
}
