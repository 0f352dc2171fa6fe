pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod repository;

pub use error::UserError;
pub use models::{RegisterRequest, User, UserView};
pub use password::PasswordService;
pub use repository::UserDirectory;
