//! Token inspection: unverified decoding for display, and local HMAC
//! verification with the signing secret.
//!
//! Unverified results must never be used for trust decisions.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::claims::Claims;
use crate::error::{Error, Result};

/// Claims segment as an untyped JSON object, every key kept.
pub type RawClaims = Map<String, Value>;

/// Decode the claims segment of a compact token without checking the
/// signature.
pub fn decode_unverified<P: DeserializeOwned>(token: &str) -> Result<Claims<P>> {
    parse_payload(token)
}

/// Like [`decode_unverified`], but keeps unknown claims and does not require
/// any particular key to be present.
pub fn decode_unverified_raw(token: &str) -> Result<RawClaims> {
    parse_payload(token)
}

fn parse_payload<T: DeserializeOwned>(token: &str) -> Result<T> {
    let payload = split_compact(token)?[1];
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| Error::Decode(format!("invalid base64 in claims: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::Decode(format!("invalid claims JSON: {e}")))
}

/// Like [`decode_unverified`], but logs the failure and returns `None`.
pub fn inspect(token: &str) -> Option<Claims> {
    match decode_unverified(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            warn!(error = %e, "Could not decode token");
            None
        }
    }
}

/// Parse the header segment of a compact token.
pub fn decode_header(token: &str) -> Result<Header> {
    let token = token.trim();
    split_compact(token)?;
    Ok(jsonwebtoken::decode_header(token)?)
}

/// Check the HS256 signature with `secret` and the `exp`/`nbf` window.
pub fn verify<P: DeserializeOwned>(token: &str, secret: &str) -> Result<Claims<P>> {
    verify_as(token, secret)
}

/// [`verify`] returning every claim untyped.
pub fn verify_raw(token: &str, secret: &str) -> Result<RawClaims> {
    verify_as(token, secret)
}

fn verify_as<T: DeserializeOwned>(token: &str, secret: &str) -> Result<T> {
    if secret.is_empty() {
        return Err(Error::Config("secret must not be empty".into()));
    }
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_nbf = true;
    validation.set_required_spec_claims(&["exp", "nbf", "iat", "iss", "sub"]);

    let data = jsonwebtoken::decode::<T>(
        token.trim(),
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}

fn split_compact(token: &str) -> Result<[&str; 3]> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    match parts.as_slice() {
        [header, payload, signature]
            if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
        {
            Ok([*header, *payload, *signature])
        }
        _ => Err(Error::Decode(format!(
            "expected 3 non-empty segments, got {}",
            parts.len()
        ))),
    }
}

/// Validity window of decoded claims, as wall-clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTimes {
    pub not_before: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TokenTimes {
    pub fn from_claims<P>(claims: &Claims<P>) -> Result<Self> {
        Self::from_timestamps(claims.nbf, claims.exp)
    }

    pub fn from_timestamps(nbf: i64, exp: i64) -> Result<Self> {
        Ok(Self {
            not_before: to_datetime("nbf", nbf)?,
            expires_at: to_datetime("exp", exp)?,
        })
    }

    /// Times of untyped claims; `None` unless both `nbf` and `exp` are integers.
    pub fn from_raw(claims: &RawClaims) -> Option<Result<Self>> {
        let nbf = claims.get("nbf").and_then(Value::as_i64)?;
        let exp = claims.get("exp").and_then(Value::as_i64)?;
        Some(Self::from_timestamps(nbf, exp))
    }

    pub fn validity(&self) -> TimeDelta {
        self.expires_at - self.not_before
    }

    /// `validity` rendered as `HH:MM:SS`; hours are not folded into days.
    pub fn validity_display(&self) -> String {
        let total = self.validity().num_seconds();
        let sign = if total < 0 { "-" } else { "" };
        let total = total.unsigned_abs();
        format!(
            "{sign}{:02}:{:02}:{:02}",
            total / 3600,
            total % 3600 / 60,
            total % 60
        )
    }
}

fn to_datetime(field: &str, secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| Error::Decode(format!("{field} out of range: {secs}")))
}
