use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::checkout::discount::DiscountOutcome;
use crate::checkout::payment::PaymentInput;
use crate::orders::{Order, ShippingInfo};

/// Request DTO for POST /api/checkout
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub shipping: ShippingInfo,
    pub payment: PaymentInput,
    #[schema(example = "SAVE10")]
    pub discount_code: Option<String>,
}

/// Everything the caller needs to confirm a completed checkout.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutReceipt {
    pub order: Order,
    #[schema(value_type = f64)]
    pub discount_amount: Decimal,
    pub discount: DiscountOutcome,
    /// Set when the supplied discount code was not recognized. The order
    /// still went through at full price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
