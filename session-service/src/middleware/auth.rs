//! Bearer-session middleware.
//!
//! `require_auth` rejects any request without a valid access token with a
//! 401 before the handler runs. `optional_auth` never rejects: a valid token
//! attaches the caller's [`Identity`], anything else lets the request through
//! anonymously. Handlers read the outcome with [`CurrentUser`] or
//! [`MaybeUser`].

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::app_state::AppState;
use crate::domain::{Identity, TokenKind};
use crate::errors::AuthError;
use crate::services::TokenService;
use crate::utils::BEARER_PREFIX;

/// Pulls the token out of `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers.get(AUTHORIZATION).ok_or(AuthError::MissingHeader)?;
    let value = header.to_str().map_err(|_| AuthError::WrongScheme)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::WrongScheme)?
        .trim();
    if token.is_empty() {
        return Err(AuthError::WrongScheme);
    }
    Ok(token)
}

/// Resolves the access token on `headers` to the identity it carries.
pub fn authenticate(tokens: &TokenService, headers: &HeaderMap) -> Result<Identity, AuthError> {
    let token = bearer_token(headers)?;
    let claims = tokens.verify(token, TokenKind::Access)?;
    Ok(claims.identity)
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = match authenticate(&state.token_service, request.headers()) {
        Ok(identity) => identity,
        Err(e) => {
            warn!(
                reason = e.reason(),
                path = %request.uri().path(),
                "rejected unauthenticated request"
            );
            return Err(e);
        }
    };

    debug!(user_id = %identity.user_id, "request authenticated");
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

pub async fn optional_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(&state.token_service, request.headers()) {
        Ok(identity) => {
            debug!(user_id = %identity.user_id, "request authenticated");
            request.extensions_mut().insert(identity);
        }
        Err(e) => {
            debug!(reason = e.reason(), "continuing without identity");
        }
    }

    next.run(request).await
}

/// The authenticated caller. Only available behind [`require_auth`] or
/// [`optional_auth`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AuthError::MissingHeader)
    }
}

/// The caller's identity if one was attached, `None` for anonymous callers.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Identity>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<Identity>().cloned()))
    }
}
