use axum::extract::{rejection::JsonRejection, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{AuthResponse, Email, LoginRequestBody};
use crate::errors::LoginError;
use crate::services::AuthService;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<impl IntoResponse, LoginError> {
    let Json(request) = payload?;
    let email = Email::parse(request.email).or(Err(LoginError::InvalidEmail))?;
    if request.password.is_empty() {
        return Err(LoginError::MissingPassword);
    }

    let user = match AuthService::login(&state, email, &request.password).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "login failed");
            return Err(e);
        }
    };

    let issued = state
        .token_service
        .issue_pair(&user.identity())
        .map_err(|e| {
            tracing::error!(error = %e, "failed to issue tokens at login");
            LoginError::InternalServerError
        })?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok((
        StatusCode::OK,
        Json(AuthResponse::new("Logged in successfully", issued)),
    ))
}
