// HTTP handlers for account registration and order history

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use validator::Validate;

use crate::orders::Order;
use crate::users::error::UserError;
use crate::users::models::{RegisterRequest, UserView};
use crate::AppState;

/// Handler for POST /api/users/register
#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserView),
        (status = 400, description = "Invalid registration input"),
        (status = 409, description = "Email already registered")
    ),
    tag = "users"
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserView>), UserError> {
    payload.validate().map_err(|errors| {
        tracing::debug!("Rejected registration with invalid payload");
        UserError::Invalid(errors.to_string())
    })?;

    let user = state
        .users
        .register(&payload.email, &payload.name, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserView::from(&user))))
}

/// Handler for GET /api/users/:email/orders
/// Lists an account's order history, newest first
#[utoipa::path(
    get,
    path = "/api/users/{email}/orders",
    params(
        ("email" = String, Path, description = "Account email")
    ),
    responses(
        (status = 200, description = "Order history", body = Vec<Order>),
        (status = 404, description = "No such account")
    ),
    tag = "users"
)]
pub async fn order_history(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Order>>, UserError> {
    let user = state
        .users
        .find_by_email(&email)
        .await
        .ok_or_else(|| UserError::NotFound(email.clone()))?;

    let mut orders = Vec::with_capacity(user.order_ids.len());
    for id in &user.order_ids {
        if let Some(order) = state.ledger.get_by_id(*id).await {
            orders.push(order);
        }
    }
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(orders))
}
