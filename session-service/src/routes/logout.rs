use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::domain::LogoutResponse;
use crate::middleware::CurrentUser;

/// Tokens are stateless, so there is nothing to invalidate server-side; the
/// client is expected to drop both tokens.
pub async fn logout(CurrentUser(identity): CurrentUser) -> impl IntoResponse {
    tracing::info!(user_id = %identity.user_id, "user logged out");

    (
        StatusCode::OK,
        Json(LogoutResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        }),
    )
}
