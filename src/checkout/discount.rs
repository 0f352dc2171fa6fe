// Percentage-off discount codes
//
// Codes are static configuration, read-only during checkout. A checkout
// applies at most one code, exactly once, against the pre-discount total.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use utoipa::ToSchema;

use crate::validation::normalize_discount_code;

/// One discount rule: a percentage in (0, 100] plus a display description.
#[derive(Debug, Clone)]
pub struct DiscountPolicy {
    pub percent: Decimal,
    pub description: String,
}

impl DiscountPolicy {
    pub fn new(percent: Decimal, description: &str) -> Self {
        debug_assert!(percent > Decimal::ZERO && percent <= dec!(100));
        Self {
            percent,
            description: description.to_string(),
        }
    }
}

/// Outcome of applying a discount code to a running total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case", tag = "kind", content = "description")]
pub enum DiscountOutcome {
    /// No code was supplied.
    NoCode,
    /// A code was supplied but is not recognized. The caller surfaces this
    /// as a warning, never as a checkout-blocking error.
    InvalidCode,
    /// The code matched and the discount was taken off the total.
    Applied(String),
}

/// Result of one discount application.
#[derive(Debug, Clone)]
pub struct DiscountResult {
    pub new_total: Decimal,
    pub discount_amount: Decimal,
    pub outcome: DiscountOutcome,
}

/// Lookup table from normalized code to policy.
#[derive(Clone)]
pub struct DiscountEngine {
    policies: HashMap<String, DiscountPolicy>,
}

impl DiscountEngine {
    pub fn new(policies: HashMap<String, DiscountPolicy>) -> Self {
        Self { policies }
    }

    /// The built-in storefront codes.
    pub fn with_default_codes() -> Self {
        let mut policies = HashMap::new();
        policies.insert(
            "SAVE10".to_string(),
            DiscountPolicy::new(dec!(10), "10% off your order"),
        );
        policies.insert(
            "WELCOME20".to_string(),
            DiscountPolicy::new(dec!(20), "20% off for new customers"),
        );
        policies.insert(
            "STUDENT15".to_string(),
            DiscountPolicy::new(dec!(15), "15% student discount"),
        );
        Self::new(policies)
    }

    /// Apply `raw_code` to `total`.
    ///
    /// The code is normalized (trimmed, upper-cased) first. An empty or
    /// absent code is not an error; an unknown code leaves the total
    /// untouched. Discount amounts are rounded to cents.
    pub fn apply(&self, total: Decimal, raw_code: Option<&str>) -> DiscountResult {
        let code = normalize_discount_code(raw_code);
        if code.is_empty() {
            return DiscountResult {
                new_total: total,
                discount_amount: Decimal::ZERO,
                outcome: DiscountOutcome::NoCode,
            };
        }

        match self.policies.get(&code) {
            Some(policy) => {
                let discount = (total * policy.percent / dec!(100)).round_dp(2);
                tracing::debug!(%code, %discount, "Discount applied");
                DiscountResult {
                    new_total: total - discount,
                    discount_amount: discount,
                    outcome: DiscountOutcome::Applied(policy.description.clone()),
                }
            }
            None => {
                tracing::debug!(%code, "Unknown discount code");
                DiscountResult {
                    new_total: total,
                    discount_amount: Decimal::ZERO,
                    outcome: DiscountOutcome::InvalidCode,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_known_code() {
        let engine = DiscountEngine::with_default_codes();
        let result = engine.apply(dec!(100.00), Some("SAVE10"));
        assert_eq!(result.new_total, dec!(90.00));
        assert_eq!(result.discount_amount, dec!(10.00));
        assert!(matches!(result.outcome, DiscountOutcome::Applied(_)));
    }

    #[test]
    fn test_apply_unknown_code_leaves_total_unchanged() {
        let engine = DiscountEngine::with_default_codes();
        let result = engine.apply(dec!(100.00), Some("BOGUS"));
        assert_eq!(result.new_total, dec!(100.00));
        assert_eq!(result.discount_amount, dec!(0));
        assert_eq!(result.outcome, DiscountOutcome::InvalidCode);
    }

    #[test]
    fn test_apply_no_code() {
        let engine = DiscountEngine::with_default_codes();
        for raw in [None, Some(""), Some("   ")] {
            let result = engine.apply(dec!(42.50), raw);
            assert_eq!(result.new_total, dec!(42.50));
            assert_eq!(result.outcome, DiscountOutcome::NoCode);
        }
    }

    #[test]
    fn test_code_is_case_insensitive() {
        let engine = DiscountEngine::with_default_codes();
        let result = engine.apply(dec!(50.00), Some("  save10  "));
        assert_eq!(result.new_total, dec!(45.00));
    }

    #[test]
    fn test_discount_rounds_to_cents() {
        let engine = DiscountEngine::with_default_codes();
        // 15% of 12.49 is 1.8735, rounded to 1.87
        let result = engine.apply(dec!(12.49), Some("STUDENT15"));
        assert_eq!(result.discount_amount, dec!(1.87));
        assert_eq!(result.new_total, dec!(10.62));
    }
}
