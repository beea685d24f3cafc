use axum::Json;

use crate::domain::SessionResponse;
use crate::middleware::CurrentUser;

pub async fn me(CurrentUser(identity): CurrentUser) -> Json<SessionResponse> {
    Json(SessionResponse {
        success: true,
        user: identity,
    })
}
