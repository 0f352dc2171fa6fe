pub mod error;
pub mod handlers;
pub mod models;
pub mod sessions;

pub use error::*;
pub use handlers::*;
pub use models::*;
pub use sessions::*;
