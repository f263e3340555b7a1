//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a call recording
    #[command(visible_alias = "rec")]
    Recording(DeleteRecordingArgs),

    /// Delete a public key credential
    #[command(visible_alias = "publickey", visible_alias = "pk")]
    PublicKey(DeletePublicKeyArgs),
}

/// Arguments for 'delete recording' subcommand
#[derive(Parser, Debug)]
pub struct DeleteRecordingArgs {
    /// Recording SID (RExxx)
    pub sid: String,

    /// Account owning the recording (defaults to the authenticated account)
    #[arg(long = "account")]
    pub account: Option<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete public-key' subcommand
#[derive(Parser, Debug)]
pub struct DeletePublicKeyArgs {
    /// Credential SID (CRxxx)
    pub sid: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
