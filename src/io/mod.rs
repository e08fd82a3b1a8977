//! Input/Output handling for the CLI.
//!
//! This module provides:
//! - Reading help text from files or stdin
//! - Unified output formatting (text, JSON)
//! - Consistent error reporting and exit codes

pub mod exit_code;
pub mod format;
pub mod input;
pub mod output;

pub use exit_code::ExitCode;
pub use format::{ErrorResponse, OutputFormat};
pub use input::{read_from, read_input};
pub use output::OutputManager;
