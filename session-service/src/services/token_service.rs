//! Token issuance and verification.
//!
//! `TokenService` mints HS256-signed access and refresh tokens for an
//! [`Identity`] and verifies them again on the way back in. It holds no
//! mutable state: the signing key, lifetimes and clock are fixed at
//! construction, so a single instance is shared across all requests behind
//! an `Arc` without locking.
//!
//! Validity of a token:
//! 1. the signature checks out against the server secret;
//! 2. `iss` and `aud` are both `maula.ai`;
//! 3. `iat <= now < exp` on the service clock;
//! 4. `tokenType` matches the kind the caller asked for, so a refresh token
//!    can never stand in for an access token.
//!
//! There is no server-side revocation. A token stays valid until it expires;
//! logout is the client discarding its copy.
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::{Identity, IssuedTokens, TokenClaims, TokenKind};
use crate::errors::TokenError;
use crate::utils::consts::env::{
    JWT_EXPIRES_IN_ENV_VAR, JWT_REFRESH_EXPIRES_IN_ENV_VAR, JWT_SECRET_ENV_VAR,
};
use crate::utils::{
    Clock, Config, ConfigError, SystemClock, JWT_AUDIENCE, JWT_ISSUER, MAX_TOKEN_LIFETIME_SECONDS,
};

const ONE_DAY_SECONDS: i64 = 24 * 60 * 60;

#[derive(Clone)]
pub struct TokenService {
    access_ttl: Duration,
    refresh_ttl: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Fails with [`ConfigError::Missing`] when no signing secret is
    /// configured and with [`ConfigError::Invalid`] when a lifetime is not
    /// a positive number of seconds within the supported maximum.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let secret = config.jwt_secret();
        if secret.trim().is_empty() {
            return Err(ConfigError::Missing(JWT_SECRET_ENV_VAR));
        }
        if secret.len() < 32 {
            tracing::warn!("JWT secret is shorter than recommended (32 bytes)");
        }
        if config.access_ttl_seconds() > ONE_DAY_SECONDS {
            tracing::warn!(
                access_ttl_seconds = config.access_ttl_seconds(),
                "access token lifetime exceeds one day"
            );
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        // Expiry is checked against the injected clock in `verify`.
        validation.validate_exp = false;
        validation.required_spec_claims =
            HashSet::from(["exp", "iat", "iss", "aud"].map(String::from));

        Ok(Self {
            access_ttl: lifetime(JWT_EXPIRES_IN_ENV_VAR, config.access_ttl_seconds())?,
            refresh_ttl: lifetime(
                JWT_REFRESH_EXPIRES_IN_ENV_VAR,
                config.refresh_ttl_seconds(),
            )?,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl.num_seconds()
    }

    fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    /// Signs a token of the given kind carrying `identity`.
    pub fn issue(&self, identity: &Identity, kind: TokenKind) -> Result<String, TokenError> {
        let now = self.clock.now();
        let exp = now
            .checked_add_signed(self.ttl(kind))
            .ok_or(TokenError::ExpiryOutOfRange)?;

        let claims = TokenClaims {
            identity: identity.clone(),
            token_type: kind,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: JWT_ISSUER.to_owned(),
            aud: JWT_AUDIENCE.to_owned(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Mints the access + refresh pair handed out at login and registration.
    pub fn issue_pair(&self, identity: &Identity) -> Result<IssuedTokens, TokenError> {
        Ok(IssuedTokens {
            identity: identity.clone(),
            access_token: self.issue(identity, TokenKind::Access)?,
            refresh_token: self.issue(identity, TokenKind::Refresh)?,
            expires_in: self.access_ttl_seconds(),
        })
    }

    /// Checks signature, issuer, audience, lifetime and token type, returning
    /// the decoded claims.
    pub fn verify(&self, token: &str, kind: TokenKind) -> Result<TokenClaims, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?.claims;

        let now = self.clock.now().timestamp();
        if now >= claims.exp {
            return Err(TokenError::Expired);
        }
        if now < claims.iat {
            return Err(TokenError::Rejected("token issued in the future".to_owned()));
        }
        if claims.token_type != kind {
            return Err(TokenError::Rejected(format!(
                "expected {kind} token, got {}",
                claims.token_type
            )));
        }

        Ok(claims)
    }

    /// Exchanges a valid refresh token for a new access token carrying the
    /// same identity.
    pub fn refresh(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify(refresh_token, TokenKind::Refresh)?;
        self.issue(&claims.identity, TokenKind::Access)
    }
}

fn lifetime(key: &'static str, seconds: i64) -> Result<Duration, ConfigError> {
    if !(1..=MAX_TOKEN_LIFETIME_SECONDS).contains(&seconds) {
        return Err(ConfigError::Invalid(key));
    }
    Duration::try_seconds(seconds).ok_or(ConfigError::Invalid(key))
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("access_ttl_seconds", &self.access_ttl_seconds())
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds())
            .finish()
    }
}
