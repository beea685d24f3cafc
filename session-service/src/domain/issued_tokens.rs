use super::Identity;

#[derive(Debug, Clone)]
pub struct IssuedTokens {
    pub identity: Identity,
    pub access_token: String,
    pub refresh_token: String,
    // Access token lifetime in seconds
    pub expires_in: i64,
}
