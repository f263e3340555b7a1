//! CLI argument parsing

mod common;
mod create;
mod delete;
mod get;
mod update;

use clap::{Parser, Subcommand};

use crate::config::{credentials, defaults};

pub use common::{parse_date_arg, OutputFormat};
pub use create::{CreatePublicKeyArgs, CreateResource};
pub use delete::{DeletePublicKeyArgs, DeleteRecordingArgs, DeleteResource};
pub use get::{DependentPhoneNumberArgs, GetResource, PagingArgs, PublicKeyArgs, RecordingArgs};
pub use update::{UpdatePublicKeyArgs, UpdateResource};

/// Twilio REST command line client
#[derive(Parser, Debug)]
#[command(name = "twctl")]
#[command(version)]
#[command(about = "Explore and manage Twilio REST resources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Account SID (overrides env vars and credentials file)
    #[arg(long, global = true)]
    pub account_sid: Option<String>,

    /// Auth token (overrides env vars and credentials file)
    #[arg(long, global = true)]
    pub auth_token: Option<String>,

    /// Profile in ~/.twilio/credentials.json
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// API region (e.g. us1, ie1, au1)
    #[arg(long, global = true, env = credentials::REGION_ENV)]
    pub region: Option<String>,

    /// Edge location (e.g. ashburn, dublin, sydney)
    #[arg(long, global = true, env = credentials::EDGE_ENV)]
    pub edge: Option<String>,

    /// Send every request to this base URL instead of the resolved host
    #[arg(long, global = true, hide = true)]
    pub base_url: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit table/CSV headers
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List or show resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Update resources
    Update {
        #[command(subcommand)]
        resource: UpdateResource,
    },

    /// Delete resources
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },
}
