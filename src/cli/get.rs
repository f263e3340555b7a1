//! Get command resource definitions and arguments

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};

use super::common::{parse_date_arg, OutputFormat};

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get call recordings
    #[command(visible_alias = "recordings", visible_alias = "rec")]
    Recording(RecordingArgs),

    /// Get public key credentials
    #[command(
        visible_alias = "public-keys",
        visible_alias = "publickey",
        visible_alias = "pk"
    )]
    PublicKey(PublicKeyArgs),

    /// Get phone numbers that depend on an address
    #[command(
        visible_alias = "dependent-phone-numbers",
        visible_alias = "dpn"
    )]
    DependentPhoneNumber(DependentPhoneNumberArgs),
}

/// Arguments for 'get recording' subcommand
#[derive(Parser, Debug)]
pub struct RecordingArgs {
    /// Recording SID (if specified, shows details for that recording)
    pub sid: Option<String>,

    /// Account owning the recordings (defaults to the authenticated account)
    #[arg(long = "account")]
    pub account: Option<String>,

    /// Only recordings of this call
    #[arg(long)]
    pub call_sid: Option<String>,

    /// Only recordings created on this date (overrides before/after)
    #[arg(long, value_parser = parse_date_arg)]
    pub date_created: Option<NaiveDateTime>,

    /// Only recordings created before this date
    #[arg(long, value_parser = parse_date_arg)]
    pub date_created_before: Option<NaiveDateTime>,

    /// Only recordings created after this date
    #[arg(long, value_parser = parse_date_arg)]
    pub date_created_after: Option<NaiveDateTime>,

    #[command(flatten)]
    pub paging: PagingArgs,

    /// Filter by SID, call SID or status (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get public-key' subcommand
#[derive(Parser, Debug)]
pub struct PublicKeyArgs {
    /// Credential SID (if specified, shows details for that key)
    pub sid: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,

    /// Filter by SID or friendly name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get dependent-phone-number' subcommand
#[derive(Parser, Debug)]
pub struct DependentPhoneNumberArgs {
    /// Address SID the phone numbers depend on
    #[arg(long = "address")]
    pub address: String,

    /// Account owning the address (defaults to the authenticated account)
    #[arg(long = "account")]
    pub account: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,

    /// Filter by SID, phone number or friendly name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Paging controls shared by list commands
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PagingArgs {
    /// Records per page requested from the API
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Maximum number of records to list
    #[arg(long)]
    pub limit: Option<u64>,

    /// Only list the first page
    #[arg(long, default_value_t = false)]
    pub first_page_only: bool,
}
