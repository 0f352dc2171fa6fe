// HTTP handlers for order lookup and status management

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::orders::error::OrderError;
use crate::orders::models::{Order, OrderStatus, UpdateStatusRequest};
use crate::AppState;

/// Handler for GET /api/orders/:id
/// Retrieves a placed order by its id
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 404, description = "Order not found")
    ),
    tag = "orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, OrderError> {
    state
        .ledger
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or_else(|| OrderError::NotFound(id.to_string()))
}

/// Handler for PATCH /api/orders/:id/status
/// Moves an order to a new status if the transition is allowed
#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Order id")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = Order),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Transition not allowed")
    ),
    tag = "orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<Order>, OrderError> {
    let new_status = OrderStatus::parse(&payload.status).map_err(|_| {
        tracing::debug!(order_id = %id, status = %payload.status, "Rejected unknown status");
        OrderError::InvalidStatus(payload.status.clone())
    })?;

    let order = state.ledger.update_status(id, new_status).await?;
    Ok(Json(order))
}
