//! Error types for `plivo-token` core library.

use thiserror::Error;

/// Result type alias using the token Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building, signing or reading access tokens.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or empty credential / input
    #[error("Configuration error: {0}")]
    Config(String),

    /// Claims or header could not be serialized to JSON
    #[error("Failed to encode claims: {0}")]
    Encoding(String),

    /// The HMAC signing primitive rejected the key or input
    #[error("Failed to sign token: {0}")]
    Signing(String),

    /// Malformed compact token passed to the inspection routines
    #[error("Failed to decode token: {0}")]
    Decode(String),

    /// Signature or time-window check failed
    #[error("Token verification failed: {0}")]
    Verification(String),
}

impl Error {
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::Json(e) => Self::Encoding(e.to_string()),
            ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Utf8(_) => {
                Self::Decode(err.to_string())
            }
            ErrorKind::InvalidSignature
            | ErrorKind::ExpiredSignature
            | ErrorKind::ImmatureSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::MissingRequiredClaim(_) => Self::Verification(err.to_string()),
            _ => Self::Signing(err.to_string()),
        }
    }
}
