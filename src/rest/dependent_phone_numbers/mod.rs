//! Dependent phone numbers of an address

mod api;
mod commands;
mod models;
mod options;

pub use commands::run_dependent_phone_number_command;
pub use models::DependentPhoneNumber;
pub use options::ReadDependentPhoneNumberOptions;
