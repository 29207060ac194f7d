//! JWT claims and header layout expected by the Plivo browser SDK.

use jsonwebtoken::{Algorithm, Header};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lifetime of a generated token in seconds (24 hours).
pub const TOKEN_VALIDITY_SECS: i64 = 24 * 60 * 60;

/// Plivo-specific JWT content type.
pub const CONTENT_TYPE: &str = "plivo;v=1";

/// Application the SDK logs into when none is configured.
pub const DEFAULT_APP_ID: &str = "37402553429571222";

/// Claims embedded in a Plivo access token.
///
/// Generic over the permission payload so callers may grant capabilities
/// beyond the voice defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims<P = Permissions> {
    /// Issuer (Plivo Auth ID).
    pub iss: String,
    /// Subject (endpoint username).
    pub sub: String,
    /// Expiration (unix timestamp).
    pub exp: i64,
    /// Not before (unix timestamp), always equal to `iat`.
    pub nbf: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Plivo application ID.
    pub app: String,
    /// Capability grants.
    pub per: P,
}

impl<P> Claims<P> {
    /// Build claims issued at `issued_at`, valid for [`TOKEN_VALIDITY_SECS`].
    ///
    /// Fails when the expiry does not fit in an `i64`.
    pub fn new(
        issuer: impl Into<String>,
        subject: impl Into<String>,
        application_id: impl Into<String>,
        permissions: P,
        issued_at: i64,
    ) -> Result<Self> {
        let exp = issued_at.checked_add(TOKEN_VALIDITY_SECS).ok_or_else(|| {
            Error::Config(format!("issue time {issued_at} leaves no room for expiry"))
        })?;
        Ok(Self {
            iss: issuer.into(),
            sub: subject.into(),
            exp,
            nbf: issued_at,
            iat: issued_at,
            app: application_id.into(),
            per: permissions,
        })
    }

    /// Seconds between `nbf` and `exp`.
    pub const fn validity_secs(&self) -> i64 {
        self.exp - self.nbf
    }
}

/// Capability map carried in the `per` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub voice: VoicePermissions,
}

/// Voice call grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoicePermissions {
    pub incoming_allow: bool,
    pub outgoing_allow: bool,
}

impl Permissions {
    pub const fn voice(incoming_allow: bool, outgoing_allow: bool) -> Self {
        Self {
            voice: VoicePermissions {
                incoming_allow,
                outgoing_allow,
            },
        }
    }
}

impl Default for Permissions {
    /// Both incoming and outgoing calls allowed.
    fn default() -> Self {
        Self::voice(true, true)
    }
}

/// HS256 header with the Plivo content type.
pub fn plivo_header() -> Header {
    let mut header = Header::new(Algorithm::HS256);
    header.cty = Some(CONTENT_TYPE.to_string());
    header
}
