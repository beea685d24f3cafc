use std::collections::HashMap;

use super::password_hasher::verify_password;
use crate::domain::{Email, User, UserStore, UserStoreError};

/// In-memory credential store keyed by normalized email.
#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<Email, User>,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError> {
        if self.users.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        self.users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn validate_user(&self, email: &Email, password: &str) -> Result<User, UserStoreError> {
        let user = self.get_user(email).await?;
        if verify_password(password, &user.password_hash).await? {
            Ok(user)
        } else {
            Err(UserStoreError::InvalidCredentials)
        }
    }
}
