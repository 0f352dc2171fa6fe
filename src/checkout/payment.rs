// Mock payment authorization
//
// No network call ever happens here. The gateway is a deterministic
// simulation behind the `PaymentAuthorizer` trait so a real processor can be
// swapped in without touching the checkout service.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::validation::{validate_card_number, validate_email};

/// Payment credentials collected for one checkout attempt. Never persisted;
/// only the method and a transaction id survive into the order record.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PaymentInput {
    #[schema(example = "credit_card")]
    pub method: String,
    #[schema(example = "4532123456789012")]
    pub card_number: Option<String>,
    #[schema(example = "12/25")]
    pub expiry: Option<String>,
    #[schema(example = "123")]
    pub cvv: Option<String>,
    pub paypal_email: Option<String>,
}

impl PaymentInput {
    fn field(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Check that the declared method is known and its required fields are
    /// present and well-formed. Runs before any authorization decision.
    pub fn validate(&self) -> Result<(), String> {
        match self.method.as_str() {
            "credit_card" => {
                let card = Self::field(&self.card_number);
                let expiry = Self::field(&self.expiry);
                let cvv = Self::field(&self.cvv);
                let (Some(card), Some(_), Some(_)) = (card, expiry, cvv) else {
                    return Err("Missing required credit card information".to_string());
                };
                if !validate_card_number(card) {
                    return Err("Invalid card number format".to_string());
                }
                Ok(())
            }
            "paypal" => {
                let Some(email) = Self::field(&self.paypal_email) else {
                    return Err("PayPal email required".to_string());
                };
                if !validate_email(email) {
                    return Err("Invalid PayPal email format".to_string());
                }
                Ok(())
            }
            _ => Err("Invalid payment method".to_string()),
        }
    }
}

/// Approve/decline decision for one checkout attempt.
#[derive(Debug, Clone)]
pub struct AuthorizationResult {
    pub approved: bool,
    pub message: String,
    pub transaction_id: Option<String>,
}

impl AuthorizationResult {
    fn approved(transaction_id: String) -> Self {
        Self {
            approved: true,
            message: "Payment authorized".to_string(),
            transaction_id: Some(transaction_id),
        }
    }

    fn declined(message: &str) -> Self {
        Self {
            approved: false,
            message: message.to_string(),
            transaction_id: None,
        }
    }
}

/// Capability interface for payment authorization.
pub trait PaymentAuthorizer: Send + Sync {
    fn authorize(&self, input: &PaymentInput) -> AuthorizationResult;
}

/// The built-in simulated gateway.
///
/// Credit cards ending in "1111" are always declined. This is a
/// deterministic test hook, not a fraud model.
#[derive(Debug, Clone, Default)]
pub struct MockPaymentGateway;

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self
    }

    fn transaction_id() -> String {
        format!("TXN{:016X}", rand::random::<u64>())
    }
}

impl PaymentAuthorizer for MockPaymentGateway {
    fn authorize(&self, input: &PaymentInput) -> AuthorizationResult {
        if let Err(reason) = input.validate() {
            return AuthorizationResult::declined(&reason);
        }

        if input.method == "credit_card" {
            let digits: String = input
                .card_number
                .as_deref()
                .unwrap_or_default()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            if digits.ends_with("1111") {
                tracing::debug!("Declined card by test hook");
                return AuthorizationResult::declined("Invalid card number");
            }
        }

        AuthorizationResult::approved(Self::transaction_id())
    }
}
