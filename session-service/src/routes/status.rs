use axum::Json;

use crate::domain::StatusResponse;
use crate::middleware::MaybeUser;

pub async fn status(MaybeUser(identity): MaybeUser) -> Json<StatusResponse> {
    Json(StatusResponse {
        success: true,
        authenticated: identity.is_some(),
        user: identity,
    })
}
