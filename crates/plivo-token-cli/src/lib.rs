//! plivo-token CLI
//!
//! Generates Plivo browser SDK access tokens from environment credentials
//! and prints a decoded view of them for manual inspection.

pub mod cli;
pub mod generate_cmd;
pub mod inspect_cmd;
pub mod output;
