// Validation utilities module
// Provides the normalization and format rules shared across cart, checkout,
// payment, and account flows.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot after it.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// 13 to 19 decimal digits, after separators are stripped.
static CARD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{13,19}$").expect("card pattern compiles"));

/// A recoverable input-validation failure. Surfaced verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email address is required")]
    EmptyEmail,

    #[error("Quantity cannot be empty")]
    EmptyQuantity,

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Quantity must be an integer: {0}")]
    FractionalQuantity(String),

    #[error("Quantity must be positive")]
    QuantityMustBePositive,
}

/// Quantity as it arrives from a form or JSON body: an integer, a float that
/// may or may not be whole-valued, or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for QuantityInput {
    fn from(value: i64) -> Self {
        QuantityInput::Int(value)
    }
}

impl From<&str> for QuantityInput {
    fn from(value: &str) -> Self {
        QuantityInput::Text(value.to_string())
    }
}

/// Trim and lower-case an email address for case-insensitive comparisons.
/// Fails when the input is empty or whitespace-only.
pub fn normalize_email(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    Ok(trimmed.to_lowercase())
}

/// Check email shape. Used for both account emails and PayPal email fields.
pub fn validate_email(email: &str) -> bool {
    let trimmed = email.trim();
    !trimmed.is_empty() && EMAIL_PATTERN.is_match(trimmed)
}

/// Validate and coerce a quantity input.
///
/// Accepts integers, whole-valued floats, and numeric strings. A
/// present-but-empty string is always rejected; callers that want a default
/// for an *absent* field handle that with `Option` before calling here.
/// With `allow_zero`, zero passes through (callers treat it as remove/no-op);
/// otherwise zero and negatives fail.
pub fn validate_quantity(raw: &QuantityInput, allow_zero: bool) -> Result<u32, ValidationError> {
    let quantity: i64 = match raw {
        QuantityInput::Int(n) => *n,
        QuantityInput::Float(f) => {
            if f.fract() != 0.0 || !f.is_finite() {
                return Err(ValidationError::FractionalQuantity(f.to_string()));
            }
            *f as i64
        }
        QuantityInput::Text(s) => {
            let stripped = s.trim();
            if stripped.is_empty() {
                return Err(ValidationError::EmptyQuantity);
            }
            stripped
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidQuantity(s.clone()))?
        }
    };

    if allow_zero && quantity == 0 {
        return Ok(0);
    }
    if quantity <= 0 {
        return Err(ValidationError::QuantityMustBePositive);
    }
    u32::try_from(quantity).map_err(|_| ValidationError::InvalidQuantity(quantity.to_string()))
}

/// Trim and upper-case a discount code. Absent or blank input normalizes to
/// the empty code, which the discount step treats as "no code".
pub fn normalize_discount_code(raw: Option<&str>) -> String {
    raw.map(|code| code.trim().to_uppercase()).unwrap_or_default()
}

/// Card numbers may arrive with spaces or dashes; the remainder must be
/// 13-19 decimal digits.
pub fn validate_card_number(raw: &str) -> bool {
    let digits: String = raw.chars().filter(|c| *c != ' ' && *c != '-').collect();
    CARD_PATTERN.is_match(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_trims_and_lowercases() {
        assert_eq!(
            normalize_email("  Test@Example.COM  ").unwrap(),
            "test@example.com"
        );
    }

    #[test]
    fn test_normalize_email_rejects_empty() {
        assert_eq!(normalize_email(""), Err(ValidationError::EmptyEmail));
        assert_eq!(normalize_email("   "), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn test_validate_email_accepts_normal_addresses() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("  user@example.com  "));
        assert!(validate_email("first.last@sub.example.org"));
    }

    #[test]
    fn test_validate_email_rejects_malformed() {
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email("two@@example.com"));
        assert!(!validate_email("user@nodot"));
        assert!(!validate_email("spa ce@example.com"));
    }

    #[test]
    fn test_validate_quantity_integer() {
        assert_eq!(validate_quantity(&QuantityInput::Int(3), false).unwrap(), 3);
        assert_eq!(validate_quantity(&QuantityInput::Int(1), true).unwrap(), 1);
    }

    #[test]
    fn test_validate_quantity_numeric_string() {
        assert_eq!(validate_quantity(&"4".into(), false).unwrap(), 4);
        assert_eq!(validate_quantity(&" 7 ".into(), true).unwrap(), 7);
    }

    #[test]
    fn test_validate_quantity_whole_float() {
        assert_eq!(
            validate_quantity(&QuantityInput::Float(2.0), false).unwrap(),
            2
        );
    }

    #[test]
    fn test_validate_quantity_fractional_float_rejected() {
        assert!(matches!(
            validate_quantity(&QuantityInput::Float(2.5), false),
            Err(ValidationError::FractionalQuantity(_))
        ));
    }

    #[test]
    fn test_validate_quantity_empty_string_rejected_in_both_modes() {
        // One consistent policy: present-but-empty is an error regardless of
        // the allow_zero flag. Absent fields default at the DTO layer.
        assert_eq!(
            validate_quantity(&"".into(), false),
            Err(ValidationError::EmptyQuantity)
        );
        assert_eq!(
            validate_quantity(&"   ".into(), true),
            Err(ValidationError::EmptyQuantity)
        );
    }

    #[test]
    fn test_validate_quantity_zero_policy() {
        assert_eq!(validate_quantity(&QuantityInput::Int(0), true).unwrap(), 0);
        assert_eq!(
            validate_quantity(&QuantityInput::Int(0), false),
            Err(ValidationError::QuantityMustBePositive)
        );
    }

    #[test]
    fn test_validate_quantity_negative_rejected() {
        assert_eq!(
            validate_quantity(&QuantityInput::Int(-2), true),
            Err(ValidationError::QuantityMustBePositive)
        );
        assert_eq!(
            validate_quantity(&"-5".into(), false),
            Err(ValidationError::QuantityMustBePositive)
        );
    }

    #[test]
    fn test_validate_quantity_garbage_string_rejected() {
        assert!(matches!(
            validate_quantity(&"abc".into(), false),
            Err(ValidationError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_normalize_discount_code() {
        assert_eq!(normalize_discount_code(Some("  save10 ")), "SAVE10");
        assert_eq!(normalize_discount_code(Some("")), "");
        assert_eq!(normalize_discount_code(None), "");
    }

    #[test]
    fn test_validate_card_number_accepts_13_to_19_digits() {
        assert!(validate_card_number("4532123456789012"));
        assert!(validate_card_number("4532 1234 5678 9012"));
        assert!(validate_card_number("4532-1234-5678-9012"));
        assert!(validate_card_number("4222222222222")); // 13 digits
        assert!(validate_card_number("4532123456789012345")); // 19 digits
    }

    #[test]
    fn test_validate_card_number_rejects_bad_input() {
        assert!(!validate_card_number(""));
        assert!(!validate_card_number("123456789012")); // 12 digits
        assert!(!validate_card_number("45321234567890123456")); // 20 digits
        assert!(!validate_card_number("4532abcd56789012"));
    }
}
