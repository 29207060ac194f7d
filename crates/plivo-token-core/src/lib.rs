//! `plivo-token` Core Library
//!
//! Builds and inspects access tokens for the Plivo browser SDK:
//! - Credential validation (Auth ID, Auth Token, endpoint username)
//! - Claims and header layout (`HS256`, `cty: plivo;v=1`, 24h validity)
//! - Signing into the compact `header.claims.signature` form
//! - Unverified decoding for display, local HMAC verification
//! - Common error types and tracing setup

pub mod claims;
pub mod credentials;
pub mod decode;
pub mod error;
pub mod token;
pub mod tracing_init;

pub use claims::{
    CONTENT_TYPE, Claims, DEFAULT_APP_ID, Permissions, TOKEN_VALIDITY_SECS, VoicePermissions,
    plivo_header,
};
pub use credentials::Credentials;
pub use decode::{
    RawClaims, TokenTimes, decode_header, decode_unverified, decode_unverified_raw, inspect,
    verify, verify_raw,
};
pub use error::{Error, Result};
pub use token::{TokenSigner, generate_token, generate_token_at};
