//! twctl - Explore and manage Twilio REST resources
//!
//! A typed client for the Twilio REST API with cursor-based pagination,
//! plus the `twctl` command line tool built on it.
//!
//! # Features
//!
//! - Lazy, forward-only iteration over paged list endpoints
//! - Async and blocking transports behind one client
//! - Region and edge aware host resolution
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # List recordings of a call
//! twctl get recordings --call-sid CA123
//!
//! # Recordings created in January, as JSON
//! twctl get rec --date-created-after 2024-01-01 --date-created-before 2024-02-01 -o json
//!
//! # Register a public key from a file
//! twctl create public-key --public-key @key.pem --friendly-name laptop
//!
//! # Phone numbers depending on an address
//! twctl get dpn --address AD123
//! ```
//!
//! ```no_run
//! use twilio_rest::{ReadRecordingOptions, TwilioClient};
//!
//! # async fn run() -> twilio_rest::Result<()> {
//! let client = TwilioClient::new("ACxxx", "token");
//! let mut recordings = client
//!     .read_recordings(&ReadRecordingOptions::new().with_call_sid("CA123"))
//!     .await?;
//! while let Some(recording) = recordings.next().await {
//!     println!("{}", recording?.sid);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod rest;
pub mod ui;

pub use cli::{Cli, Command, CreateResource, DeleteResource, GetResource, OutputFormat, UpdateResource};
pub use error::{Result, TwilioError};
pub use rest::dependent_phone_numbers::ReadDependentPhoneNumberOptions;
pub use rest::public_keys::{
    CreatePublicKeyOptions, DeletePublicKeyOptions, FetchPublicKeyOptions, ReadPublicKeyOptions,
    UpdatePublicKeyOptions,
};
pub use rest::recordings::{DeleteRecordingOptions, FetchRecordingOptions, ReadRecordingOptions};
pub use rest::{
    BlockingResourceSet, CredentialResolver, DependentPhoneNumber, Page, PaginatorState,
    PublicKey, Recording, Resource, ResourceSet, TwilioClient,
};
