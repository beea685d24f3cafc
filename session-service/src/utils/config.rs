use std::env;
use std::fmt;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts::env::{
    APP_ADDRESS_ENV_VAR, JWT_EXPIRES_IN_ENV_VAR, JWT_REFRESH_EXPIRES_IN_ENV_VAR,
    JWT_SECRET_ENV_VAR,
};
use super::consts::{
    DEFAULT_ACCESS_EXPIRES_IN, DEFAULT_APP_ADDRESS, DEFAULT_REFRESH_EXPIRES_IN,
    MAX_TOKEN_LIFETIME_SECONDS,
};

/// Process-wide settings, read once at startup and never mutated.
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
    app_address: String,
}

impl Config {
    /// Builds a config around `jwt_secret` with every other setting at its
    /// default.
    pub fn new(jwt_secret: impl Into<String>) -> Result<Self, ConfigError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::Missing(JWT_SECRET_ENV_VAR));
        }

        Ok(Self {
            jwt_secret,
            access_ttl_seconds: parse_lifetime(JWT_EXPIRES_IN_ENV_VAR, DEFAULT_ACCESS_EXPIRES_IN)?,
            refresh_ttl_seconds: parse_lifetime(
                JWT_REFRESH_EXPIRES_IN_ENV_VAR,
                DEFAULT_REFRESH_EXPIRES_IN,
            )?,
            app_address: DEFAULT_APP_ADDRESS.to_owned(),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(JWT_SECRET_ENV_VAR).ok_or(ConfigError::Missing(JWT_SECRET_ENV_VAR))?;
        let mut config = Self::new(secret)?;

        if let Some(raw) = lookup(JWT_EXPIRES_IN_ENV_VAR) {
            config.access_ttl_seconds = parse_lifetime(JWT_EXPIRES_IN_ENV_VAR, &raw)?;
        }
        if let Some(raw) = lookup(JWT_REFRESH_EXPIRES_IN_ENV_VAR) {
            config.refresh_ttl_seconds = parse_lifetime(JWT_REFRESH_EXPIRES_IN_ENV_VAR, &raw)?;
        }
        if let Some(address) = lookup(APP_ADDRESS_ENV_VAR) {
            config.app_address = address;
        }

        Ok(config)
    }

    pub fn with_access_ttl_seconds(mut self, seconds: i64) -> Self {
        self.access_ttl_seconds = seconds;
        self
    }

    pub fn with_refresh_ttl_seconds(mut self, seconds: i64) -> Self {
        self.refresh_ttl_seconds = seconds;
        self
    }

    pub fn with_app_address(mut self, address: impl Into<String>) -> Self {
        self.app_address = address.into();
        self
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_seconds
    }
    pub fn app_address(&self) -> &str {
        &self.app_address
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"<redacted>")
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds)
            .field("app_address", &self.app_address)
            .finish()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

/// Parses a token lifetime such as `"7d"`, `"15m"` or `"3600"` into seconds.
///
/// Accepted units are `s`, `m`, `h`, `d` and `w`; a bare integer is seconds.
/// Zero, negative and overflowing values are rejected, as is anything longer
/// than [`MAX_TOKEN_LIFETIME_SECONDS`].
pub fn parse_lifetime(key: &'static str, raw: &str) -> Result<i64, ConfigError> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (digits, unit) = raw.split_at(split);

    let value: i64 = digits.parse().map_err(|_| ConfigError::Invalid(key))?;
    let multiplier = match unit {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        "w" => 7 * 24 * 60 * 60,
        _ => return Err(ConfigError::Invalid(key)),
    };

    match value.checked_mul(multiplier) {
        Some(seconds) if (1..=MAX_TOKEN_LIFETIME_SECONDS).contains(&seconds) => Ok(seconds),
        _ => Err(ConfigError::Invalid(key)),
    }
}
