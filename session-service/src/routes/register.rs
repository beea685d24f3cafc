use axum::extract::{rejection::JsonRejection, State};
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{AuthResponse, Email, Password, RegisterRequestBody};
use crate::errors::RegisterError;
use crate::services::AuthService;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequestBody>, JsonRejection>,
) -> Result<impl IntoResponse, RegisterError> {
    let Json(request) = payload?;
    let email = Email::parse(request.email).or(Err(RegisterError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(RegisterError::InvalidPassword))?;

    let user = AuthService::register(&state, email, password).await?;

    let issued = state
        .token_service
        .issue_pair(&user.identity())
        .map_err(|e| {
            tracing::error!(error = %e, "failed to issue tokens after registration");
            RegisterError::InternalServerError
        })?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new("User registered successfully", issued)),
    ))
}
