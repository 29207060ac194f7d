//! Command-line surface.

use clap::{Parser, Subcommand};

use crate::generate_cmd::GenerateArgs;
use crate::inspect_cmd::InspectArgs;

#[derive(Parser, Debug)]
#[command(name = "plivo-token")]
#[command(
    version,
    about = "Generate and inspect Plivo browser SDK access tokens",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Output logs as JSON (for structured log aggregation).
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options for `generate`, accepted without the subcommand name.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign a new token (default)
    Generate(GenerateArgs),
    /// Decode an existing token
    Inspect(InspectArgs),
}

impl Cli {
    /// The selected subcommand, falling back to `generate`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Generate(self.generate))
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_generates() {
        let cli = Cli::try_parse_from([
            "plivo-token",
            "--auth-id",
            "AID1",
            "--auth-token",
            "SECRET",
            "--endpoint-username",
            "user1",
        ])
        .unwrap();
        let Command::Generate(args) = cli.into_command() else {
            panic!("expected generate");
        };
        assert_eq!(args.auth_id.as_deref(), Some("AID1"));
        assert_eq!(args.endpoint_username.as_deref(), Some("user1"));
    }

    #[test]
    fn explicit_generate_subcommand() {
        let cli = Cli::try_parse_from([
            "plivo-token",
            "generate",
            "--app-id",
            "APP1",
            "--deny-incoming",
            "--token-only",
        ])
        .unwrap();
        let Command::Generate(args) = cli.into_command() else {
            panic!("expected generate");
        };
        assert_eq!(args.app_id, "APP1");
        assert!(args.deny_incoming);
        assert!(!args.deny_outgoing);
        assert!(args.token_only);
    }

    #[test]
    fn inspect_takes_token_argument() {
        let cli = Cli::try_parse_from(["plivo-token", "inspect", "--log-json", "a.b.c"]).unwrap();
        assert!(cli.log_json);
        let Command::Inspect(args) = cli.into_command() else {
            panic!("expected inspect");
        };
        assert_eq!(args.token, "a.b.c");
        assert!(!args.verify);
    }
}
