use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::domain::ErrorResponse;

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("malformed json: {0}")]
    Json(#[from] JsonRejection),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least 8 characters long, contain at least one uppercase letter and one special character.")]
    InvalidPassword,

    #[error("User with email {0} already exists.")]
    UserAlreadyExists(String),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for RegisterError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RegisterError::Json(_) => StatusCode::BAD_REQUEST,
            RegisterError::InvalidEmail => StatusCode::BAD_REQUEST,
            RegisterError::InvalidPassword => StatusCode::BAD_REQUEST,
            RegisterError::UserAlreadyExists(_) => StatusCode::CONFLICT,
            RegisterError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
