use uuid::Uuid;

use super::password_hasher::hash_password;
use crate::app_state::AppState;
use crate::domain::{Email, Password, User, UserStoreError};
use crate::errors::{LoginError, RegisterError};
use crate::utils::DEFAULT_SUBSCRIPTION;

/// Credential checks that sit in front of token issuance.
pub struct AuthService;

impl AuthService {
    /// New accounts start on the default subscription tier.
    ///
    /// The password is hashed before the store's write lock is taken, so
    /// concurrent logins only wait for the insert itself.
    pub async fn register(
        state: &AppState,
        email: Email,
        password: Password,
    ) -> Result<User, RegisterError> {
        let taken = state.user_store.read().await.get_user(&email).await.is_ok();
        if taken {
            return Err(RegisterError::UserAlreadyExists(email.as_ref().to_string()));
        }

        let password_hash = hash_password(password.as_ref())
            .await
            .map_err(|_| RegisterError::InternalServerError)?;
        let user = User::new(
            Uuid::new_v4().to_string(),
            email.clone(),
            password_hash,
            DEFAULT_SUBSCRIPTION.to_owned(),
        );

        // The email may have been claimed while hashing; the store re-checks.
        let result = state.user_store.write().await.add_user(user.clone()).await;

        result.map(|()| user).map_err(|e| match e {
            UserStoreError::UserAlreadyExists => {
                RegisterError::UserAlreadyExists(email.as_ref().to_string())
            }
            _ => RegisterError::InternalServerError,
        })
    }

    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(state: &AppState, email: Email, password: &str) -> Result<User, LoginError> {
        match state
            .user_store
            .read()
            .await
            .validate_user(&email, password)
            .await
        {
            Ok(user) => Ok(user),
            Err(UserStoreError::UserNotFound) | Err(UserStoreError::InvalidCredentials) => {
                Err(LoginError::InvalidCredentials)
            }
            Err(_) => Err(LoginError::InternalServerError),
        }
    }
}
