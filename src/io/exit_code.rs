//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success
//! - `5`: Reading input or writing output failed
//! - `6`: Configuration is missing, unreadable or invalid

use crate::error::HelpError;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<&HelpError> for ExitCode {
    fn from(error: &HelpError) -> Self {
        Self::from_error(error)
    }
}

impl ExitCode {
    /// Convert a `HelpError` to the appropriate exit code.
    pub fn from_error(error: &HelpError) -> Self {
        match error {
            HelpError::InputRead { .. }
            | HelpError::StdinRead { .. }
            | HelpError::OutputWrite { .. }
            | HelpError::FileWrite { .. } => ExitCode::IoError,

            HelpError::Config { .. }
            | HelpError::ConfigExists { .. }
            | HelpError::InvalidLayout { .. }
            | HelpError::InvalidStyle { .. } => ExitCode::ConfigError,
        }
    }
}
