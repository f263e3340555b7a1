//! Public key credentials

mod api;
mod commands;
mod models;
mod options;

pub use commands::{
    run_create_public_key_command, run_delete_public_key_command, run_public_key_command,
    run_update_public_key_command,
};
pub use models::PublicKey;
pub use options::{
    CreatePublicKeyOptions, DeletePublicKeyOptions, FetchPublicKeyOptions, ReadPublicKeyOptions,
    UpdatePublicKeyOptions,
};
