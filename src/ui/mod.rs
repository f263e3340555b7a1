//! UI utilities for terminal output
//!
//! This module provides user interface components like progress spinners
//! and confirmation prompts.

mod confirm;
mod spinner;

pub use confirm::{batch_refusal, confirm_action};
pub use spinner::{clear_spinner, create_spinner, finish_spinner, update_spinner};
