//! plivo-token
//!
//! Prints a signed Plivo browser SDK access token and its decoded claims.

use clap::Parser;
use tracing::{debug, info, warn};

use plivo_token_cli::cli::{Cli, Command};
use plivo_token_cli::{generate_cmd, inspect_cmd};
use plivo_token_core::tracing_init::{DEFAULT_FILTER, init_tracing};

fn main() -> anyhow::Result<()> {
    // Must run before parsing so clap's env fallbacks see the .env values.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(DEFAULT_FILTER, cli.log_json);

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "Failed to load .env file"),
    }

    info!(version = env!("CARGO_PKG_VERSION"), "Starting plivo-token");

    let mut out = std::io::stdout().lock();
    match cli.into_command() {
        Command::Generate(args) => generate_cmd::run(&args, &mut out),
        Command::Inspect(args) => inspect_cmd::run(&args, &mut out),
    }
}
