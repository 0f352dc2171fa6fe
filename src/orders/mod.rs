pub mod error;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod status_machine;

pub use error::OrderError;
pub use ledger::OrderLedger;
pub use models::{Order, OrderLine, OrderStatus, PaymentSummary, ShippingInfo, UpdateStatusRequest};
pub use status_machine::StatusMachine;
