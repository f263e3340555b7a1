//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Register a public key credential
    #[command(visible_alias = "publickey", visible_alias = "pk")]
    PublicKey(CreatePublicKeyArgs),
}

/// Arguments for 'create public-key' subcommand
#[derive(Parser, Debug)]
pub struct CreatePublicKeyArgs {
    /// PEM-encoded public key (use @FILE to read it from a file)
    #[arg(long = "public-key", allow_hyphen_values = true)]
    pub public_key: String,

    /// Human-readable name for the key
    #[arg(long)]
    pub friendly_name: Option<String>,

    /// Subaccount the key is created for
    #[arg(long = "target-account")]
    pub target_account: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
