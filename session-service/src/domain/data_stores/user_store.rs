use crate::domain::{Email, User};

use super::UserStoreError;

/// Credential store owned by user management. Handlers only ever reach it
/// through this trait.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Stores `user`, whose password is already hashed. Fails when the
    /// email is taken.
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError>;

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError>;

    /// Returns the user when `password` matches the stored hash.
    async fn validate_user(&self, email: &Email, password: &str) -> Result<User, UserStoreError>;
}
