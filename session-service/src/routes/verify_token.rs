use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::domain::SessionResponse;
use crate::middleware::CurrentUser;

/// Echoes the identity of a token that made it through `require_auth`.
pub async fn verify_token(CurrentUser(identity): CurrentUser) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(SessionResponse {
            success: true,
            user: identity,
        }),
    )
}
