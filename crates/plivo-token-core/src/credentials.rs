//! Plivo account credentials used to sign access tokens.

use std::fmt;

use crate::error::{Error, Result};

/// Environment variable holding the Plivo Auth ID (token issuer).
pub const AUTH_ID_VAR: &str = "PLIVO_AUTH_ID";
/// Environment variable holding the Plivo Auth Token (signing secret).
pub const AUTH_TOKEN_VAR: &str = "PLIVO_AUTH_TOKEN";
/// Environment variable holding the endpoint username (token subject).
pub const ENDPOINT_USERNAME_VAR: &str = "PLIVO_ENDPOINT_USERNAME";

/// Number of secret characters shown by [`Credentials::masked_secret`].
const SECRET_PREVIEW_CHARS: usize = 10;

/// Validated issuer / secret / subject triple.
///
/// All three values are guaranteed non-empty. The secret never appears in
/// `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    auth_id: String,
    auth_token: String,
    endpoint_username: String,
}

impl Credentials {
    /// Build credentials from optional raw values.
    ///
    /// Empty strings count as missing. The error lists every missing
    /// variable, not only the first one.
    pub fn new(
        auth_id: Option<String>,
        auth_token: Option<String>,
        endpoint_username: Option<String>,
    ) -> Result<Self> {
        let auth_id = non_empty(auth_id);
        let auth_token = non_empty(auth_token);
        let endpoint_username = non_empty(endpoint_username);

        match (auth_id, auth_token, endpoint_username) {
            (Some(auth_id), Some(auth_token), Some(endpoint_username)) => Ok(Self {
                auth_id,
                auth_token,
                endpoint_username,
            }),
            (auth_id, auth_token, endpoint_username) => {
                let missing: Vec<&str> = [
                    (auth_id.is_none(), AUTH_ID_VAR),
                    (auth_token.is_none(), AUTH_TOKEN_VAR),
                    (endpoint_username.is_none(), ENDPOINT_USERNAME_VAR),
                ]
                .into_iter()
                .filter_map(|(absent, name)| absent.then_some(name))
                .collect();
                Err(Error::Config(format!(
                    "missing required environment variables: {}",
                    missing.join(", ")
                )))
            }
        }
    }

    pub fn auth_id(&self) -> &str {
        &self.auth_id
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn endpoint_username(&self) -> &str {
        &self.endpoint_username
    }

    /// First few characters of the secret followed by `...`, for display.
    pub fn masked_secret(&self) -> String {
        let preview: String = self.auth_token.chars().take(SECRET_PREVIEW_CHARS).collect();
        format!("{preview}...")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_id", &self.auth_id)
            .field("auth_token", &"<redacted>")
            .field("endpoint_username", &self.endpoint_username)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
