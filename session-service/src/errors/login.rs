use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::domain::ErrorResponse;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("malformed json: {0}")]
    Json(#[from] JsonRejection),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password is required")]
    MissingPassword,

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LoginError::Json(_) => StatusCode::BAD_REQUEST,
            LoginError::InvalidEmail => StatusCode::BAD_REQUEST,
            LoginError::MissingPassword => StatusCode::BAD_REQUEST,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LoginError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
