//! `inspect`: decode an existing token for display.

use std::io::Write;

use anyhow::Context;
use tracing::debug;

use plivo_token_core::credentials::AUTH_TOKEN_VAR;
use plivo_token_core::{TokenTimes, decode_header, decode_unverified_raw, verify_raw};

use crate::output;

#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Compact token (`header.claims.signature`).
    pub token: String,

    /// Also check the signature with the auth token.
    #[arg(long)]
    pub verify: bool,

    /// Plivo Auth Token, used only with --verify.
    #[arg(long, env = AUTH_TOKEN_VAR, hide_env_values = true)]
    pub auth_token: Option<String>,
}

/// Execute `inspect`, writing the decoded header and claims to `out`.
pub fn run(args: &InspectArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let header = decode_header(&args.token).context("cannot read token header")?;
    let claims = decode_unverified_raw(&args.token).context("cannot read token claims")?;
    debug!(claims = claims.len(), "Decoded token");

    output::write_json(out, "Header", &header)?;
    writeln!(out)?;
    output::write_json(out, "Claims", &claims)?;
    match TokenTimes::from_raw(&claims) {
        Some(times) => output::write_times(out, &times?)?,
        None => {
            writeln!(out)?;
            writeln!(out, "Token times: unavailable (nbf or exp missing)")?;
        }
    }
    writeln!(out)?;

    if args.verify {
        let secret = args
            .auth_token
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                plivo_token_core::Error::Config(format!("{AUTH_TOKEN_VAR} is required for --verify"))
            })?;
        verify_raw(&args.token, secret)?;
        writeln!(out, "Signature: verified (HS256)")?;
    } else {
        writeln!(out, "Signature: not checked")?;
    }
    Ok(())
}
