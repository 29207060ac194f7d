//! Human-readable rendering of generated and inspected tokens.
//!
//! User-facing output uses writeln! to the given writer (stdout in the binary).

use std::io::Write;

use serde::Serialize;

use plivo_token_core::{Credentials, TokenTimes};

const RULE_WIDTH: usize = 50;

pub fn write_rule(out: &mut impl Write, ch: char) -> anyhow::Result<()> {
    writeln!(out, "{}", ch.to_string().repeat(RULE_WIDTH))?;
    Ok(())
}

/// Title plus the credentials in use, with the secret masked.
pub fn write_banner(out: &mut impl Write, creds: &Credentials) -> anyhow::Result<()> {
    writeln!(out, "Plivo JWT Token Generator")?;
    write_rule(out, '=')?;
    writeln!(out, "Auth ID: {}", creds.auth_id())?;
    writeln!(out, "Auth Token: {}", creds.masked_secret())?;
    writeln!(out, "Endpoint Username: {}", creds.endpoint_username())?;
    writeln!(out)?;
    Ok(())
}

pub fn write_token(out: &mut impl Write, token: &str) -> anyhow::Result<()> {
    write_rule(out, '-')?;
    writeln!(out, "JWT Token:")?;
    writeln!(out, "{token}")?;
    writeln!(out)?;
    Ok(())
}

/// Pretty-printed JSON under a heading.
pub fn write_json(
    out: &mut impl Write,
    heading: &str,
    value: &impl Serialize,
) -> anyhow::Result<()> {
    writeln!(out, "{heading}:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub fn write_times(out: &mut impl Write, times: &TokenTimes) -> anyhow::Result<()> {
    const FMT: &str = "%Y-%m-%d %H:%M:%S UTC";
    writeln!(out)?;
    writeln!(out, "Token times:")?;
    writeln!(out, "Not before: {}", times.not_before.format(FMT))?;
    writeln!(out, "Expires:    {}", times.expires_at.format(FMT))?;
    writeln!(out, "Validity:   {}", times.validity_display())?;
    Ok(())
}
