use axum::extract::{rejection::JsonRejection, State};
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{RefreshRequestBody, RefreshResponse};
use crate::errors::RefreshError;

/// Trades a refresh token for a new access token. The refresh token itself
/// is not rotated; it stays valid until its own expiry.
pub async fn refresh(
    State(state): State<AppState>,
    payload: Result<Json<RefreshRequestBody>, JsonRejection>,
) -> Result<impl IntoResponse, RefreshError> {
    let Json(request) = payload?;
    let refresh_token = request
        .refresh_token
        .filter(|token| !token.trim().is_empty())
        .ok_or(RefreshError::MissingToken)?;

    let token = state
        .token_service
        .refresh(refresh_token.trim())
        .map_err(|e| {
            tracing::warn!(error = %e, "refresh rejected");
            RefreshError::from(e)
        })?;

    Ok((
        StatusCode::OK,
        Json(RefreshResponse {
            success: true,
            token,
            expires_in: state.token_service.access_ttl_seconds(),
        }),
    ))
}
