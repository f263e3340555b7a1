//! Call recordings

mod api;
mod commands;
mod models;
mod options;

pub use commands::{run_delete_recording_command, run_recording_command};
pub use models::Recording;
pub use options::{DeleteRecordingOptions, FetchRecordingOptions, ReadRecordingOptions};
