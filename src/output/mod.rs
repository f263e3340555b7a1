//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;
mod dependent_phone_numbers;
mod public_keys;
mod recordings;

pub use common::{escape_csv, print_structured};
pub use dependent_phone_numbers::output_dependent_phone_numbers;
pub use public_keys::output_public_keys;
pub use recordings::output_recordings;
