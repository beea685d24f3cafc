pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const JWT_EXPIRES_IN_ENV_VAR: &str = "JWT_EXPIRES_IN";
    pub const JWT_REFRESH_EXPIRES_IN_ENV_VAR: &str = "JWT_REFRESH_EXPIRES_IN";
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
}

// Tokens are minted for and accepted from the platform domain only.
pub const JWT_ISSUER: &str = "maula.ai";
pub const JWT_AUDIENCE: &str = "maula.ai";

pub const DEFAULT_ACCESS_EXPIRES_IN: &str = "7d";
pub const DEFAULT_REFRESH_EXPIRES_IN: &str = "30d";
// Longest lifetime a token may be configured with (ten years).
pub const MAX_TOKEN_LIFETIME_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

pub const DEFAULT_APP_ADDRESS: &str = "0.0.0.0:3000";

pub const DEFAULT_SUBSCRIPTION: &str = "free";

pub const BEARER_PREFIX: &str = "Bearer ";
