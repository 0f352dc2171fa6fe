// HTTP handler for the checkout endpoint

use axum::{extract::State, http::HeaderMap, http::StatusCode, response::Json};

use crate::cart::sessions::session_id;
use crate::checkout::error::CheckoutError;
use crate::checkout::models::{CheckoutRequest, CheckoutReceipt};
use crate::AppState;

/// Handler for POST /api/checkout
/// Runs the full checkout protocol against the caller's session cart
#[utoipa::path(
    post,
    path = "/api/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 201, description = "Order placed", body = CheckoutReceipt),
        (status = 400, description = "Cart empty or invalid shipping/payment input"),
        (status = 402, description = "Payment declined")
    ),
    tag = "checkout"
)]
pub async fn checkout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<CheckoutReceipt>), CheckoutError> {
    let session = session_id(&headers)?;
    let cart = state.sessions.cart_for(&session).await;
    let receipt = state.checkout.checkout(&cart, payload).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
