use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::users::error::UserError;
use crate::users::models::User;
use crate::users::password::PasswordService;
use crate::validation::{normalize_email, validate_email};

/// In-memory account store, keyed by normalized email.
#[derive(Clone, Default)]
pub struct UserDirectory {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account. Emails are normalized before uniqueness is
    /// checked, so `Demo@X.com` and `demo@x.com` are the same account.
    pub async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<User, UserError> {
        let email = normalize_email(email)?;
        if !validate_email(&email) {
            return Err(UserError::InvalidEmail);
        }
        if password.len() < 8 {
            return Err(UserError::WeakPassword);
        }

        let mut users = self.users.write().await;
        if users.contains_key(&email) {
            tracing::warn!(%email, "Registration rejected, email taken");
            return Err(UserError::EmailTaken);
        }

        let user = User {
            email: email.clone(),
            name: name.trim().to_string(),
            password_hash: PasswordService::hash_password(password)?,
            created_at: Utc::now(),
            order_ids: Vec::new(),
        };
        users.insert(email.clone(), user.clone());
        tracing::info!(%email, "Account registered");
        Ok(user)
    }

    /// Check a password against the stored hash. Unknown emails verify as
    /// false rather than revealing whether the account exists.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> Result<bool, UserError> {
        match self.find_by_email(email).await {
            Some(user) => PasswordService::verify_password(password, &user.password_hash),
            None => Ok(false),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let email = normalize_email(email).ok()?;
        let users = self.users.read().await;
        users.get(&email).cloned()
    }

    /// Link an order to an account's history. Best-effort: unknown emails
    /// are ignored so guest checkout works unchanged.
    pub async fn append_order(&self, email: &str, order_id: Uuid) {
        let Ok(email) = normalize_email(email) else {
            return;
        };
        let mut users = self.users.write().await;
        if let Some(user) = users.get_mut(&email) {
            user.order_ids.push(order_id);
            tracing::debug!(%email, %order_id, "Order linked to account history");
        }
    }

    /// Seed the demo account used by the storefront walkthrough.
    pub async fn seed_demo_user(&self) {
        if let Err(err) = self
            .register("demo@bookstore.com", "Demo User", "password123")
            .await
        {
            tracing::warn!(error = %err, "Demo user seeding skipped");
        }
    }
}
