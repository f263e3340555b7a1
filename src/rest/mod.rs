//! Twilio REST client module
//!
//! Request/response plumbing, the cursor paginator, and the resource
//! modules built on top of them.

mod client;
mod credentials;
pub mod helpers;
pub mod options;
pub mod page;
pub mod path;
pub mod request;
pub mod resource_set;
pub mod response;
pub mod serialize;
pub mod traits;
pub mod transport;

pub mod dependent_phone_numbers;
pub mod public_keys;
pub mod recordings;

pub use client::TwilioClient;
pub use credentials::CredentialResolver;
pub use dependent_phone_numbers::{
    run_dependent_phone_number_command, DependentPhoneNumber, ReadDependentPhoneNumberOptions,
};
pub use options::{Options, PageOptions, ReadOptions};
pub use page::{Page, PageLink};
pub use public_keys::{
    run_create_public_key_command, run_delete_public_key_command, run_public_key_command,
    run_update_public_key_command, PublicKey,
};
pub use recordings::{run_delete_recording_command, run_recording_command, Recording};
pub use request::{Domain, HttpMethod, Params, Request};
pub use resource_set::{BlockingResourceSet, PaginatorState, ResourceSet};
pub use response::{Response, RestException};
pub use traits::Resource;
pub use transport::{BlockingHttpTransport, BlockingTransport, Credentials, HttpTransport, Transport};
