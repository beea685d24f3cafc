use thiserror::Error;

/// Why a token could not be issued or verified.
///
/// Verification failures are deliberately coarse: callers match on the
/// variant to decide between "refresh your session" (`Expired`) and "this
/// token is no good" (everything else).
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is malformed")]
    Malformed,

    #[error("token rejected: {0}")]
    Rejected(String),

    #[error("token expiry is outside the representable time range")]
    ExpiryOutOfRange,

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => TokenError::Malformed,
            ErrorKind::InvalidIssuer => TokenError::Rejected("invalid issuer".to_owned()),
            ErrorKind::InvalidAudience => TokenError::Rejected("invalid audience".to_owned()),
            ErrorKind::InvalidAlgorithm => TokenError::Rejected("unexpected algorithm".to_owned()),
            _ => TokenError::Rejected(e.to_string()),
        }
    }
}
