use serde::{Deserialize, Serialize};

use super::{Identity, IssuedTokens};

/// Body returned by register and login.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: Identity,
}

impl AuthResponse {
    pub fn new(message: impl Into<String>, issued: IssuedTokens) -> Self {
        Self {
            success: true,
            message: message.into(),
            token: issued.access_token,
            refresh_token: issued.refresh_token,
            expires_in: issued.expires_in,
            user: issued.identity,
        }
    }
}
