//! Update command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'update' command
#[derive(Subcommand, Debug)]
pub enum UpdateResource {
    /// Update a public key credential
    #[command(visible_alias = "publickey", visible_alias = "pk")]
    PublicKey(UpdatePublicKeyArgs),
}

/// Arguments for 'update public-key' subcommand
#[derive(Parser, Debug)]
pub struct UpdatePublicKeyArgs {
    /// Credential SID
    pub sid: String,

    /// New friendly name
    #[arg(long)]
    pub friendly_name: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
