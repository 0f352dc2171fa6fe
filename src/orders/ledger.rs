use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::orders::error::OrderError;
use crate::orders::models::{Order, OrderLine, OrderStatus, PaymentSummary, ShippingInfo};
use crate::orders::status_machine::StatusMachine;

/// In-memory record of every order placed while the service is up.
#[derive(Clone, Default)]
pub struct OrderLedger {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new order.
    ///
    /// Rejects orders with no lines or a negative total; both indicate a bug
    /// in the caller rather than bad user input, but the ledger refuses to
    /// store them either way.
    pub async fn create(
        &self,
        customer_email: String,
        lines: Vec<OrderLine>,
        shipping: ShippingInfo,
        payment: PaymentSummary,
        total_amount: Decimal,
    ) -> Result<Order, OrderError> {
        if lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if total_amount < Decimal::ZERO {
            return Err(OrderError::NegativeTotal);
        }

        let order = Order {
            id: Uuid::new_v4(),
            customer_email,
            lines,
            shipping,
            payment,
            total_amount,
            created_at: Utc::now(),
            status: OrderStatus::default(),
        };

        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());

        tracing::info!(
            order_id = %order.id,
            total = %order.total_amount,
            "Order recorded"
        );

        Ok(order)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Option<Order> {
        let orders = self.orders.read().await;
        orders.get(&id).cloned()
    }

    /// All orders placed by `email`, newest first.
    pub async fn find_by_customer(&self, email: &str) -> Vec<Order> {
        let orders = self.orders.read().await;
        let mut found: Vec<Order> = orders
            .values()
            .filter(|order| order.customer_email.eq_ignore_ascii_case(email))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }

    /// Move an order to a new status, enforcing the transition rules.
    pub async fn update_status(
        &self,
        id: Uuid,
        new_status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(&id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;

        let next = StatusMachine::transition(order.status, new_status)
            .map_err(OrderError::InvalidTransition)?;

        if order.status != next {
            tracing::info!(
                order_id = %id,
                from = %order.status,
                to = %next,
                "Order status updated"
            );
        }
        order.status = next;
        Ok(order.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_line() -> OrderLine {
        OrderLine {
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            unit_price: dec!(8.99),
            quantity: 2,
            subtotal: dec!(17.98),
        }
    }

    fn sample_payment() -> PaymentSummary {
        PaymentSummary {
            method: "credit_card".to_string(),
            transaction_id: "TXN0000000000000001".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_fetch_order() {
        let ledger = OrderLedger::new();
        let order = ledger
            .create(
                "demo@bookstore.com".to_string(),
                vec![sample_line()],
                ShippingInfo::default(),
                sample_payment(),
                dec!(17.98),
            )
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::Confirmed);

        let fetched = ledger.get_by_id(order.id).await.unwrap();
        assert_eq!(fetched.total_amount, dec!(17.98));
        assert_eq!(fetched.lines.len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_order() {
        let ledger = OrderLedger::new();
        let result = ledger
            .create(
                "demo@bookstore.com".to_string(),
                vec![],
                ShippingInfo::default(),
                sample_payment(),
                dec!(0),
            )
            .await;
        assert!(matches!(result, Err(OrderError::EmptyOrder)));
    }

    #[tokio::test]
    async fn test_create_rejects_negative_total() {
        let ledger = OrderLedger::new();
        let result = ledger
            .create(
                "demo@bookstore.com".to_string(),
                vec![sample_line()],
                ShippingInfo::default(),
                sample_payment(),
                dec!(-1.00),
            )
            .await;
        assert!(matches!(result, Err(OrderError::NegativeTotal)));
    }

    #[tokio::test]
    async fn test_find_by_customer_newest_first() {
        let ledger = OrderLedger::new();
        let first = ledger
            .create(
                "demo@bookstore.com".to_string(),
                vec![sample_line()],
                ShippingInfo::default(),
                sample_payment(),
                dec!(17.98),
            )
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = ledger
            .create(
                "Demo@Bookstore.com".to_string(),
                vec![sample_line()],
                ShippingInfo::default(),
                sample_payment(),
                dec!(17.98),
            )
            .await
            .unwrap();

        let history = ledger.find_by_customer("demo@bookstore.com").await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second.id);
        assert_eq!(history[1].id, first.id);

        assert!(ledger.find_by_customer("other@bookstore.com").await.is_empty());
    }

    #[tokio::test]
    async fn test_update_status_follows_machine() {
        let ledger = OrderLedger::new();
        let order = ledger
            .create(
                "demo@bookstore.com".to_string(),
                vec![sample_line()],
                ShippingInfo::default(),
                sample_payment(),
                dec!(17.98),
            )
            .await
            .unwrap();

        let updated = ledger
            .update_status(order.id, OrderStatus::Processing)
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Processing);

        let result = ledger.update_status(order.id, OrderStatus::Confirmed).await;
        assert!(matches!(result, Err(OrderError::InvalidTransition(_))));
    }

    #[tokio::test]
    async fn test_update_status_unknown_order() {
        let ledger = OrderLedger::new();
        let result = ledger
            .update_status(Uuid::new_v4(), OrderStatus::Processing)
            .await;
        assert!(matches!(result, Err(OrderError::NotFound(_))));
    }
}
