//! Error types for the help formatter
//!
//! The formatting functions themselves are total and never fail. These
//! errors cover the edges around them: reading input, writing output and
//! loading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for help formatting operations
#[derive(Error, Debug)]
pub enum HelpError {
    /// File system errors
    #[error("Failed to read input '{path}': {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read from standard input: {source}")]
    StdinRead { source: std::io::Error },

    #[error("Failed to write output: {source}")]
    OutputWrite { source: std::io::Error },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Configuration file already exists at '{path}'")]
    ConfigExists { path: PathBuf },

    #[error(
        "Invalid layout: width ({width}) must be greater than indentation ({indentation})"
    )]
    InvalidLayout { width: usize, indentation: usize },

    #[error("Unknown style '{spec}' for theme entry '{entry}'")]
    InvalidStyle { entry: String, spec: String },
}

impl HelpError {
    /// Get a stable status code for this error type.
    pub fn status_code(&self) -> String {
        match self {
            Self::InputRead { .. } => "INPUT_READ_ERROR",
            Self::StdinRead { .. } => "STDIN_READ_ERROR",
            Self::OutputWrite { .. } => "OUTPUT_WRITE_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::ConfigExists { .. } => "CONFIG_EXISTS",
            Self::InvalidLayout { .. } => "INVALID_LAYOUT",
            Self::InvalidStyle { .. } => "INVALID_STYLE",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::InputRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Omit the file argument to read from standard input",
            ],
            Self::ConfigExists { .. } => vec!["Use --force to overwrite the existing file"],
            Self::InvalidLayout { .. } => vec![
                "Increase --width or lower --indent",
                "Check [layout] in .helpfmt/settings.toml and HELPFMT_LAYOUT__* variables",
            ],
            Self::InvalidStyle { .. } => vec![
                "Use dotted style names such as \"red.bold\" or \"green\"",
                "Run 'helpfmt init --force' to regenerate a valid settings file",
            ],
            Self::Config { .. } => {
                vec!["Run 'helpfmt init --force' to regenerate a valid settings file"]
            }
            Self::StdinRead { .. } | Self::OutputWrite { .. } | Self::FileWrite { .. } => vec![],
        }
    }
}

impl From<Box<figment::Error>> for HelpError {
    fn from(err: Box<figment::Error>) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for help formatting operations
pub type HelpResult<T> = Result<T, HelpError>;
