//! `generate`: sign a fresh token from the configured credentials.

use std::io::Write;

use anyhow::Context;
use tracing::{info, warn};

use plivo_token_core::credentials::{AUTH_ID_VAR, AUTH_TOKEN_VAR, ENDPOINT_USERNAME_VAR};
use plivo_token_core::{
    Credentials, DEFAULT_APP_ID, Permissions, TokenSigner, TokenTimes, inspect, verify,
};

use crate::output;

const MISSING_CONFIG_HINT: &str = "set PLIVO_AUTH_ID, PLIVO_AUTH_TOKEN and \
     PLIVO_ENDPOINT_USERNAME in the environment, or create a .env file with them";

/// Options for `generate`. Credentials fall back to the environment.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Plivo Auth ID (token issuer).
    #[arg(long, env = AUTH_ID_VAR)]
    pub auth_id: Option<String>,

    /// Plivo Auth Token (signing secret).
    #[arg(long, env = AUTH_TOKEN_VAR, hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Endpoint username (token subject).
    #[arg(long, env = ENDPOINT_USERNAME_VAR)]
    pub endpoint_username: Option<String>,

    /// Plivo application ID.
    #[arg(long, env = "PLIVO_APP_ID", default_value = DEFAULT_APP_ID)]
    pub app_id: String,

    /// Do not grant incoming voice calls.
    #[arg(long)]
    pub deny_incoming: bool,

    /// Do not grant outgoing voice calls.
    #[arg(long)]
    pub deny_outgoing: bool,

    /// Print only the token.
    #[arg(long)]
    pub token_only: bool,

    /// Verify the signature of the new token with the auth token before printing.
    #[arg(long)]
    pub verify: bool,
}

impl GenerateArgs {
    pub const fn permissions(&self) -> Permissions {
        Permissions::voice(!self.deny_incoming, !self.deny_outgoing)
    }

    pub fn credentials(&self) -> anyhow::Result<Credentials> {
        Credentials::new(
            self.auth_id.clone(),
            self.auth_token.clone(),
            self.endpoint_username.clone(),
        )
        .context(MISSING_CONFIG_HINT)
    }
}

/// Execute `generate`, writing the report to `out`.
pub fn run(args: &GenerateArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let creds = args.credentials()?;
    let signer = TokenSigner::new(creds, &args.app_id, args.permissions())?;

    let token = signer.sign().context("failed to generate token")?;
    info!(
        subject = %signer.credentials().endpoint_username(),
        app = %signer.application_id(),
        "Generated access token"
    );

    if args.verify {
        verify::<Permissions>(&token, signer.credentials().auth_token())
            .context("freshly signed token failed verification")?;
    }

    if args.token_only {
        writeln!(out, "{token}")?;
        return Ok(());
    }

    output::write_banner(out, signer.credentials())?;
    output::write_token(out, &token)?;
    if args.verify {
        writeln!(out, "Signature: verified (HS256)")?;
        writeln!(out)?;
    }

    match inspect(&token) {
        Some(claims) => {
            output::write_json(out, "Decoded claims", &claims)?;
            match TokenTimes::from_claims(&claims) {
                Ok(times) => output::write_times(out, &times)?,
                Err(e) => warn!(error = %e, "Token times out of range"),
            }
        }
        None => writeln!(out, "Decoded claims: unavailable")?,
    }

    writeln!(out)?;
    output::write_rule(out, '=')?;
    Ok(())
}
