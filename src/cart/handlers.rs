// HTTP handlers for cart endpoints

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::cart::{session_id, Cart, CartError};
use crate::validation::{validate_quantity, QuantityInput};
use crate::AppState;

/// Request body for POST /api/cart/items
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddItemRequest {
    #[schema(example = "The Great Gatsby")]
    pub title: String,
    /// Integer, whole float, or numeric string; defaults to 1 when absent.
    #[schema(value_type = Option<i64>, example = 2)]
    pub quantity: Option<QuantityInput>,
}

/// Request body for PUT /api/cart/items/:title
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    /// Absolute quantity; zero removes the line.
    #[schema(value_type = i64, example = 3)]
    pub quantity: QuantityInput,
}

/// One line of the cart view
#[derive(Debug, Serialize, ToSchema)]
pub struct CartLineView {
    pub title: String,
    pub author: String,
    #[schema(value_type = f64)]
    pub unit_price: Decimal,
    pub quantity: u32,
    #[schema(value_type = f64)]
    pub line_total: Decimal,
}

/// Response DTO for the session cart
#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    #[schema(value_type = f64)]
    pub total_price: Decimal,
    pub total_items: u32,
    pub is_empty: bool,
}

impl CartView {
    pub fn of(cart: &Cart) -> Self {
        let items = cart
            .snapshot()
            .into_iter()
            .map(|line| CartLineView {
                title: line.book.title.clone(),
                author: line.book.author.clone(),
                unit_price: line.book.price,
                line_total: line.line_total(),
                quantity: line.quantity,
            })
            .collect();
        Self {
            items,
            total_price: cart.total_price(),
            total_items: cart.total_items(),
            is_empty: cart.is_empty(),
        }
    }
}

/// Handler for GET /api/cart
/// Returns the cart for the caller's session
#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Current cart contents", body = CartView),
        (status = 400, description = "Invalid session header")
    ),
    tag = "cart"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CartView>, CartError> {
    let cart = state.sessions.cart_for(&session_id(&headers)?).await;
    let cart = cart.lock().await;
    Ok(Json(CartView::of(&cart)))
}

/// Handler for POST /api/cart/items
/// Adds a book to the session cart; quantities for the same title are summed
#[utoipa::path(
    post,
    path = "/api/cart/items",
    request_body = AddItemRequest,
    responses(
        (status = 201, description = "Item added", body = CartView),
        (status = 400, description = "Invalid quantity"),
        (status = 404, description = "Book not found")
    ),
    tag = "cart"
)]
pub async fn add_cart_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<CartView>), CartError> {
    // Absent quantity defaults to 1; a present value is validated allowing
    // zero, and zero stays a no-op inside the cart.
    let quantity = match &request.quantity {
        None => 1,
        Some(raw) => validate_quantity(raw, true)?,
    };

    let book = state
        .books
        .find_by_title(&request.title)
        .ok_or_else(|| CartError::BookNotFound(request.title.clone()))?;

    let cart = state.sessions.cart_for(&session_id(&headers)?).await;
    let mut cart = cart.lock().await;
    cart.add_item(book, quantity);

    tracing::debug!("Added {} x {:?} to cart", quantity, request.title);
    Ok((StatusCode::CREATED, Json(CartView::of(&cart))))
}

/// Handler for PUT /api/cart/items/:title
/// Sets the absolute quantity for a cart line; zero removes it
#[utoipa::path(
    put,
    path = "/api/cart/items/{title}",
    params(
        ("title" = String, Path, description = "Book title")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Cart updated", body = CartView),
        (status = 400, description = "Invalid quantity")
    ),
    tag = "cart"
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(title): Path<String>,
    Json(request): Json<UpdateItemRequest>,
) -> Result<Json<CartView>, CartError> {
    let quantity = validate_quantity(&request.quantity, true)?;

    let cart = state.sessions.cart_for(&session_id(&headers)?).await;
    let mut cart = cart.lock().await;
    cart.update_quantity(&title, quantity);

    tracing::debug!("Set {:?} quantity to {}", title, quantity);
    Ok(Json(CartView::of(&cart)))
}

/// Handler for DELETE /api/cart/items/:title
/// Removes a cart line; removing an absent title succeeds
#[utoipa::path(
    delete,
    path = "/api/cart/items/{title}",
    params(
        ("title" = String, Path, description = "Book title")
    ),
    responses(
        (status = 200, description = "Item removed", body = CartView),
        (status = 400, description = "Invalid session header")
    ),
    tag = "cart"
)]
pub async fn remove_cart_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(title): Path<String>,
) -> Result<Json<CartView>, CartError> {
    let cart = state.sessions.cart_for(&session_id(&headers)?).await;
    let mut cart = cart.lock().await;
    cart.remove_item(&title);
    Ok(Json(CartView::of(&cart)))
}

/// Handler for DELETE /api/cart
/// Clears every line from the session cart
#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart cleared", body = CartView),
        (status = 400, description = "Invalid session header")
    ),
    tag = "cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CartView>, CartError> {
    let cart = state.sessions.cart_for(&session_id(&headers)?).await;
    let mut cart = cart.lock().await;
    cart.clear();
    Ok(Json(CartView::of(&cart)))
}
