// Order confirmation notifications
//
// The storefront has no real mail transport; confirmations are written to the
// log. The sink is a capability trait so checkout never knows the difference.

use crate::orders::Order;

/// Capability interface for post-checkout notifications. Failures are
/// reported to the caller but must never fail the checkout that triggered
/// them.
pub trait NotificationSink: Send + Sync {
    fn order_confirmed(&self, email: &str, order: &Order) -> Result<(), String>;
}

/// Log-backed confirmation "emails".
#[derive(Debug, Clone, Default)]
pub struct LogNotificationSink;

impl LogNotificationSink {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for LogNotificationSink {
    fn order_confirmed(&self, email: &str, order: &Order) -> Result<(), String> {
        tracing::info!(
            to = %email,
            order_id = %order.id,
            total = %order.total_amount,
            items = order.lines.len(),
            ship_to = %order.shipping.name,
            address = %order.shipping.address,
            "Order confirmation email sent"
        );
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Sink that always fails, for exercising the non-fatal path.
    #[derive(Default)]
    pub struct FailingSink {
        pub calls: AtomicUsize,
    }

    impl NotificationSink for FailingSink {
        fn order_confirmed(&self, _email: &str, _order: &Order) -> Result<(), String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err("smtp unreachable".to_string())
        }
    }
}
