//! Access token issuance.

use jsonwebtoken::EncodingKey;
use serde::Serialize;
use tracing::debug;

use crate::claims::{Claims, Permissions, plivo_header};
use crate::credentials::Credentials;
use crate::error::{Error, Result};

/// Sign a fresh access token issued now.
///
/// Returns the compact `header.claims.signature` form. Every string input
/// must be non-empty; this is checked before any signing attempt.
pub fn generate_token<P: Serialize>(
    issuer: &str,
    secret: &str,
    subject: &str,
    application_id: &str,
    permissions: &P,
) -> Result<String> {
    generate_token_at(issuer, secret, subject, application_id, permissions, now_secs())
}

/// Same as [`generate_token`] with an explicit issue time (unix seconds).
///
/// Identical inputs produce identical tokens.
pub fn generate_token_at<P: Serialize>(
    issuer: &str,
    secret: &str,
    subject: &str,
    application_id: &str,
    permissions: &P,
    issued_at: i64,
) -> Result<String> {
    require("issuer", issuer)?;
    require("secret", secret)?;
    require("subject", subject)?;
    require("application id", application_id)?;

    let claims = Claims::new(issuer, subject, application_id, permissions, issued_at)?;
    encode_claims(&claims, &EncodingKey::from_secret(secret.as_bytes()))
}

/// Signs tokens for one endpoint with pre-validated credentials.
#[derive(Clone)]
pub struct TokenSigner<P = Permissions> {
    credentials: Credentials,
    encoding_key: EncodingKey,
    application_id: String,
    permissions: P,
}

impl<P: Serialize> TokenSigner<P> {
    /// Create a signer for `application_id` granting `permissions`.
    pub fn new(credentials: Credentials, application_id: &str, permissions: P) -> Result<Self> {
        require("application id", application_id)?;
        let encoding_key = EncodingKey::from_secret(credentials.auth_token().as_bytes());
        Ok(Self {
            credentials,
            encoding_key,
            application_id: application_id.to_string(),
            permissions,
        })
    }

    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// Sign a token issued now.
    pub fn sign(&self) -> Result<String> {
        self.sign_at(now_secs())
    }

    /// Sign a token issued at `issued_at` (unix seconds).
    pub fn sign_at(&self, issued_at: i64) -> Result<String> {
        let claims = Claims::new(
            self.credentials.auth_id(),
            self.credentials.endpoint_username(),
            self.application_id.as_str(),
            &self.permissions,
            issued_at,
        )?;
        let token = encode_claims(&claims, &self.encoding_key)?;
        debug!(
            subject = %claims.sub,
            app = %claims.app,
            expires_at = claims.exp,
            "Signed access token"
        );
        Ok(token)
    }
}

fn encode_claims<P: Serialize>(claims: &Claims<P>, key: &EncodingKey) -> Result<String> {
    Ok(jsonwebtoken::encode(&plivo_header(), claims, key)?)
}

fn require(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Config(format!("{name} must not be empty")));
    }
    Ok(())
}

pub(crate) fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}
