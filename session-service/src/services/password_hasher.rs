use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::domain::UserStoreError;

// Argon2 is slow on purpose; both calls run on the blocking pool.

/// Produces an argon2id PHC string for `password`.
pub async fn hash_password(password: &str) -> Result<String, UserStoreError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!(error = %e, "password hashing failed");
                UserStoreError::UnexpectedError
            })
    })
    .await
    .map_err(|_| UserStoreError::UnexpectedError)?
}

pub async fn verify_password(password: &str, hash: &str) -> Result<bool, UserStoreError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hash).map_err(|_| UserStoreError::UnexpectedError)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    })
    .await
    .map_err(|_| UserStoreError::UnexpectedError)?
}
