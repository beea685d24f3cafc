use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use super::TokenError;
use crate::domain::ErrorResponse;

/// Rejections produced by the bearer-session middleware. Every variant is a
/// 401 with a distinct message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Access denied. No token provided.")]
    MissingHeader,

    #[error("Invalid token format. Expected 'Bearer <token>'.")]
    WrongScheme,

    #[error("Token has expired. Please refresh your session.")]
    Expired,

    #[error("Invalid token.")]
    InvalidToken,

    #[error("Token verification failed.")]
    VerificationFailed,
}

impl AuthError {
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "missing_header",
            AuthError::WrongScheme => "wrong_scheme",
            AuthError::Expired => "expired",
            AuthError::InvalidToken => "invalid_token",
            AuthError::VerificationFailed => "verification_failed",
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => AuthError::Expired,
            TokenError::InvalidSignature | TokenError::Malformed => AuthError::InvalidToken,
            TokenError::Rejected(_)
            | TokenError::ExpiryOutOfRange
            | TokenError::Signing(_) => AuthError::VerificationFailed,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new(self.to_string())),
        )
            .into_response()
    }
}
