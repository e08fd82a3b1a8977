//! Format definitions for CLI output.

use crate::error::HelpError;
use crate::io::exit_code::ExitCode;
use serde::{Deserialize, Serialize};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default)
    Text,
    /// JSON for tool integration
    Json,
}

impl OutputFormat {
    /// Create format from JSON flag.
    #[must_use]
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }

    /// Check if format is JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// JSON shape of an error written to stderr in JSON mode.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always "error"
    pub status: String,
    /// Stable code from [`HelpError::status_code`]
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Recovery suggestions
    pub suggestions: Vec<String>,
    /// Exit code for shell scripts
    pub exit_code: u8,
}

impl From<&HelpError> for ErrorResponse {
    fn from(error: &HelpError) -> Self {
        Self {
            status: "error".to_string(),
            code: error.status_code(),
            message: error.to_string(),
            suggestions: error
                .recovery_suggestions()
                .into_iter()
                .map(String::from)
                .collect(),
            exit_code: ExitCode::from_error(error) as u8,
        }
    }
}
