use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::cart::CartLine;

/// Order status enum representing the lifecycle of a confirmed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Convert status to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parse status from string; anything outside the five valid values fails
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "confirmed" => Ok(OrderStatus::Confirmed),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Confirmed
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shipping details collected for one checkout attempt
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ShippingInfo {
    #[schema(example = "Demo User")]
    pub name: String,
    #[schema(example = "demo@bookstore.com")]
    pub email: String,
    #[schema(example = "123 Demo Street")]
    pub address: String,
    #[schema(example = "Demo City")]
    pub city: String,
    #[schema(example = "12345")]
    pub zip_code: String,
}

/// Payment summary persisted on an order: the method and an opaque
/// transaction id, never card or PAN data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentSummary {
    #[schema(example = "credit_card")]
    pub method: String,
    #[schema(example = "TXN9F2C4A1D03B6E512")]
    pub transaction_id: String,
}

/// One line of a placed order, copied out of the cart at purchase time
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderLine {
    pub title: String,
    pub author: String,
    #[schema(value_type = f64)]
    pub unit_price: Decimal,
    pub quantity: u32,
    #[schema(value_type = f64)]
    pub subtotal: Decimal,
}

impl From<CartLine> for OrderLine {
    fn from(line: CartLine) -> Self {
        let subtotal = line.line_total();
        Self {
            title: line.book.title,
            author: line.book.author,
            unit_price: line.book.price,
            quantity: line.quantity,
            subtotal,
        }
    }
}

/// The immutable record of a completed purchase.
///
/// Everything except `status` is fixed at creation; status moves only through
/// the transitions the status machine allows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub customer_email: String,
    pub lines: Vec<OrderLine>,
    pub shipping: ShippingInfo,
    pub payment: PaymentSummary,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Request DTO for updating order status
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[schema(example = "processing")]
    pub status: String,
}
