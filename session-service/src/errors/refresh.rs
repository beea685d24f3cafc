use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use super::TokenError;
use crate::domain::ErrorResponse;

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("malformed json: {0}")]
    Json(#[from] JsonRejection),

    #[error("Refresh token is required.")]
    MissingToken,

    #[error("Refresh token has expired. Please log in again.")]
    Expired,

    #[error("Invalid refresh token.")]
    InvalidToken,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl From<TokenError> for RefreshError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => RefreshError::Expired,
            TokenError::InvalidSignature | TokenError::Malformed | TokenError::Rejected(_) => {
                RefreshError::InvalidToken
            }
            TokenError::ExpiryOutOfRange | TokenError::Signing(_) => {
                RefreshError::InternalServerError
            }
        }
    }
}

impl IntoResponse for RefreshError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RefreshError::Json(_) => StatusCode::BAD_REQUEST,
            RefreshError::MissingToken => StatusCode::BAD_REQUEST,
            RefreshError::Expired => StatusCode::UNAUTHORIZED,
            RefreshError::InvalidToken => StatusCode::UNAUTHORIZED,
            RefreshError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
