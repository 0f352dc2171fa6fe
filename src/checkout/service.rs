// Checkout orchestration
//
// The one component with a multi-step protocol. Steps run in a fixed order
// and the first failure short-circuits the rest; reordering them changes
// which error a caller sees and is a compatibility break.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cart::Cart;
use crate::checkout::discount::{DiscountEngine, DiscountOutcome};
use crate::checkout::error::CheckoutError;
use crate::checkout::models::{CheckoutRequest, CheckoutReceipt};
use crate::checkout::payment::PaymentAuthorizer;
use crate::notify::NotificationSink;
use crate::orders::{OrderLedger, OrderLine, PaymentSummary, ShippingInfo};
use crate::users::UserDirectory;
use crate::validation::{normalize_email, validate_email};

/// Shipping fields checked for presence, in the order their errors surface.
const REQUIRED_SHIPPING_FIELDS: [&str; 5] = ["name", "email", "address", "city", "zip_code"];

#[derive(Clone)]
pub struct CheckoutService {
    discounts: DiscountEngine,
    authorizer: Arc<dyn PaymentAuthorizer>,
    ledger: OrderLedger,
    users: UserDirectory,
    notifier: Arc<dyn NotificationSink>,
}

impl CheckoutService {
    pub fn new(
        discounts: DiscountEngine,
        authorizer: Arc<dyn PaymentAuthorizer>,
        ledger: OrderLedger,
        users: UserDirectory,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            discounts,
            authorizer,
            ledger,
            users,
            notifier,
        }
    }

    /// Run one checkout attempt against `cart`.
    ///
    /// The cart mutex is held for the whole run, so snapshot-then-clear is
    /// indivisible and two concurrent attempts cannot both materialize an
    /// order from the same lines. On any failure the cart is left untouched.
    pub async fn checkout(
        &self,
        cart: &Arc<Mutex<Cart>>,
        request: CheckoutRequest,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        let mut cart = cart.lock().await;

        if cart.is_empty() {
            tracing::debug!("Checkout rejected, cart is empty");
            return Err(CheckoutError::EmptyCart);
        }

        let shipping = &request.shipping;
        for (field, value) in REQUIRED_SHIPPING_FIELDS.iter().zip([
            &shipping.name,
            &shipping.email,
            &shipping.address,
            &shipping.city,
            &shipping.zip_code,
        ]) {
            if value.trim().is_empty() {
                tracing::debug!(field, "Checkout rejected, missing shipping field");
                return Err(CheckoutError::MissingField(field.to_string()));
            }
        }

        let customer_email =
            normalize_email(&shipping.email).map_err(|_| CheckoutError::InvalidEmail)?;
        if !validate_email(&customer_email) {
            tracing::debug!("Checkout rejected, malformed shipping email");
            return Err(CheckoutError::InvalidEmail);
        }

        request
            .payment
            .validate()
            .map_err(CheckoutError::InvalidPayment)?;

        let pre_discount_total = cart.total_price();
        let discount = self
            .discounts
            .apply(pre_discount_total, request.discount_code.as_deref());

        let auth = self.authorizer.authorize(&request.payment);
        if !auth.approved {
            tracing::info!(reason = %auth.message, "Payment declined");
            return Err(CheckoutError::PaymentDeclined(auth.message));
        }
        let transaction_id = auth
            .transaction_id
            .ok_or_else(|| CheckoutError::PaymentDeclined(auth.message))?;

        let lines: Vec<OrderLine> = cart.snapshot().into_iter().map(OrderLine::from).collect();
        let shipping = ShippingInfo {
            email: customer_email.clone(),
            ..request.shipping.clone()
        };
        let payment = PaymentSummary {
            method: request.payment.method.clone(),
            transaction_id,
        };

        let order = self
            .ledger
            .create(
                customer_email.clone(),
                lines,
                shipping,
                payment,
                discount.new_total,
            )
            .await?;

        self.users.append_order(&customer_email, order.id).await;

        if let Err(reason) = self.notifier.order_confirmed(&customer_email, &order) {
            // Notification failure never fails the checkout
            tracing::warn!(%reason, order_id = %order.id, "Order confirmation not delivered");
        }

        cart.clear();
        tracing::info!(order_id = %order.id, total = %order.total_amount, "Checkout completed");

        let warning = match discount.outcome {
            DiscountOutcome::InvalidCode => Some("Invalid discount code".to_string()),
            _ => None,
        };

        Ok(CheckoutReceipt {
            order,
            discount_amount: discount.discount_amount,
            discount: discount.outcome,
            warning,
        })
    }
}
