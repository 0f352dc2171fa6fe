// Per-session cart store
//
// Each session owns exactly one cart behind its own mutex; checkout holds
// that mutex across its whole run so snapshot-then-clear is indivisible.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::HeaderMap;
use tokio::sync::{Mutex, RwLock};

use crate::cart::Cart;

/// Request header carrying the shopping-session identity.
pub const SESSION_HEADER: &str = "x-session-id";

/// Fallback session for callers that do not send the header. This reproduces
/// the single-cart behaviour of a cookie-less storefront.
const DEFAULT_SESSION: &str = "default";

/// Shared registry of session carts.
#[derive(Clone, Default)]
pub struct CartSessions {
    carts: Arc<RwLock<HashMap<String, Arc<Mutex<Cart>>>>>,
}

impl CartSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cart for `session_id`, created empty on first use.
    pub async fn cart_for(&self, session_id: &str) -> Arc<Mutex<Cart>> {
        {
            let carts = self.carts.read().await;
            if let Some(cart) = carts.get(session_id) {
                return Arc::clone(cart);
            }
        }
        let mut carts = self.carts.write().await;
        Arc::clone(
            carts
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(Cart::new()))),
        )
    }
}

/// A session header that was sent but cannot identify a session, either
/// non-UTF-8 bytes or a blank value. Absent headers are not an error and
/// fall back to [`DEFAULT_SESSION`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid X-Session-Id header")]
pub struct InvalidSessionHeader;

/// Extract the session id from request headers. Callers that omit the header
/// share the default cart; a header that is present but unreadable is
/// rejected so distinct clients never collapse onto one session by accident.
pub fn session_id(headers: &HeaderMap) -> Result<String, InvalidSessionHeader> {
    let Some(value) = headers.get(SESSION_HEADER) else {
        return Ok(DEFAULT_SESSION.to_string());
    };
    let value = value.to_str().map_err(|_| InvalidSessionHeader)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InvalidSessionHeader);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_same_session_gets_same_cart() {
        let sessions = CartSessions::new();
        let a = sessions.cart_for("alpha").await;
        let b = sessions.cart_for("alpha").await;
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn test_distinct_sessions_get_distinct_carts() {
        let sessions = CartSessions::new();
        let a = sessions.cart_for("alpha").await;
        let b = sessions.cart_for("beta").await;
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_session_id_defaults_when_header_absent() {
        let headers = HeaderMap::new();
        assert_eq!(session_id(&headers).unwrap(), "default");
    }

    #[test]
    fn test_session_id_reads_header() {
        let mut headers = HeaderMap::new();
        headers.insert(SESSION_HEADER, HeaderValue::from_static("shopper-1"));
        assert_eq!(session_id(&headers).unwrap(), "shopper-1");
    }

    #[test]
    fn test_session_id_rejects_blank_header() {
        let mut headers = HeaderMap::new();
        headers.insert(SESSION_HEADER, HeaderValue::from_static("   "));
        assert_eq!(session_id(&headers), Err(InvalidSessionHeader));
    }

    #[test]
    fn test_session_id_rejects_non_utf8_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            SESSION_HEADER,
            HeaderValue::from_bytes(&[0xFF, 0xFE]).unwrap(),
        );
        assert_eq!(session_id(&headers), Err(InvalidSessionHeader));
    }
}
