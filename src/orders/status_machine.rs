use crate::orders::OrderStatus;

/// Service for managing order status transitions
pub struct StatusMachine;

impl StatusMachine {
    /// Check if a status transition is valid
    ///
    /// # Valid Transitions
    /// - Confirmed → Processing, Cancelled
    /// - Processing → Shipped, Cancelled
    /// - Shipped → Delivered, Cancelled
    /// - Delivered → (terminal)
    /// - Cancelled → (terminal)
    /// - Any status → Same status (idempotent)
    pub fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
        // Same status is always valid (idempotent)
        if from == to {
            return true;
        }

        match (from, to) {
            (OrderStatus::Confirmed, OrderStatus::Processing) => true,
            (OrderStatus::Confirmed, OrderStatus::Cancelled) => true,

            (OrderStatus::Processing, OrderStatus::Shipped) => true,
            (OrderStatus::Processing, OrderStatus::Cancelled) => true,

            (OrderStatus::Shipped, OrderStatus::Delivered) => true,
            (OrderStatus::Shipped, OrderStatus::Cancelled) => true,

            // Delivered and Cancelled are terminal
            _ => false,
        }
    }

    /// Attempt to transition from one status to another
    ///
    /// Returns `Ok(to)` if the transition is valid, `Err(message)` otherwise.
    pub fn transition(from: OrderStatus, to: OrderStatus) -> Result<OrderStatus, String> {
        if Self::is_valid_transition(from, to) {
            Ok(to)
        } else {
            Err(format!("Invalid status transition from {} to {}", from, to))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmed_to_processing() {
        assert!(StatusMachine::is_valid_transition(
            OrderStatus::Confirmed,
            OrderStatus::Processing
        ));
    }

    #[test]
    fn test_processing_to_shipped() {
        assert!(StatusMachine::is_valid_transition(
            OrderStatus::Processing,
            OrderStatus::Shipped
        ));
    }

    #[test]
    fn test_shipped_to_delivered() {
        assert!(StatusMachine::is_valid_transition(
            OrderStatus::Shipped,
            OrderStatus::Delivered
        ));
    }

    #[test]
    fn test_cancel_from_every_active_state() {
        for from in [
            OrderStatus::Confirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
        ] {
            assert!(
                StatusMachine::is_valid_transition(from, OrderStatus::Cancelled),
                "should be able to cancel from {}",
                from
            );
        }
    }

    #[test]
    fn test_no_skip_transitions() {
        assert!(!StatusMachine::is_valid_transition(
            OrderStatus::Confirmed,
            OrderStatus::Shipped
        ));
        assert!(!StatusMachine::is_valid_transition(
            OrderStatus::Confirmed,
            OrderStatus::Delivered
        ));
        assert!(!StatusMachine::is_valid_transition(
            OrderStatus::Processing,
            OrderStatus::Delivered
        ));
    }

    #[test]
    fn test_no_backward_transitions() {
        assert!(!StatusMachine::is_valid_transition(
            OrderStatus::Processing,
            OrderStatus::Confirmed
        ));
        assert!(!StatusMachine::is_valid_transition(
            OrderStatus::Shipped,
            OrderStatus::Processing
        ));
        assert!(!StatusMachine::is_valid_transition(
            OrderStatus::Delivered,
            OrderStatus::Shipped
        ));
    }

    #[test]
    fn test_delivered_is_terminal() {
        assert!(!StatusMachine::is_valid_transition(
            OrderStatus::Delivered,
            OrderStatus::Cancelled
        ));
        assert!(!StatusMachine::is_valid_transition(
            OrderStatus::Delivered,
            OrderStatus::Confirmed
        ));
    }

    #[test]
    fn test_cancelled_is_terminal() {
        assert!(!StatusMachine::is_valid_transition(
            OrderStatus::Cancelled,
            OrderStatus::Confirmed
        ));
        assert!(!StatusMachine::is_valid_transition(
            OrderStatus::Cancelled,
            OrderStatus::Delivered
        ));
    }

    #[test]
    fn test_transition_valid() {
        let result = StatusMachine::transition(OrderStatus::Confirmed, OrderStatus::Processing);
        assert_eq!(result.unwrap(), OrderStatus::Processing);
    }

    #[test]
    fn test_transition_invalid() {
        let result = StatusMachine::transition(OrderStatus::Confirmed, OrderStatus::Delivered);
        assert!(result.unwrap_err().contains("Invalid status transition"));
    }
}
