pub mod discount;
pub mod error;
pub mod handlers;
pub mod models;
pub mod payment;
pub mod service;

pub use discount::{DiscountEngine, DiscountOutcome, DiscountPolicy};
pub use error::CheckoutError;
pub use models::{CheckoutReceipt, CheckoutRequest};
pub use payment::{AuthorizationResult, MockPaymentGateway, PaymentAuthorizer, PaymentInput};
pub use service::CheckoutService;
