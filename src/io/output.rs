//! Output management for CLI commands.
//!
//! Handles formatting and display for different output formats,
//! providing a unified interface for text and JSON output.

use crate::display::{ColorChoice, Destination, Terminal};
use crate::error::HelpError;
use crate::io::exit_code::ExitCode;
use crate::io::format::{ErrorResponse, OutputFormat};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Manages output formatting and display.
///
/// A closed pipe on stdout (`helpfmt wrap | head`) is not an error; the
/// remaining output is dropped.
pub struct OutputManager {
    format: OutputFormat,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
    stderr_color: bool,
}

impl OutputManager {
    /// Create a new output manager writing to the process streams.
    pub fn new(format: OutputFormat, color: ColorChoice) -> Self {
        Self {
            format,
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
            stderr_color: Terminal::stderr(color).is_color_capable(),
        }
    }

    /// Create an output manager with custom writers.
    pub fn new_with_writers(
        format: OutputFormat,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            stdout,
            stderr,
            stderr_color: false,
        }
    }

    /// Style error prefixes written to stderr.
    pub fn with_stderr_color(mut self, color: bool) -> Self {
        self.stderr_color = color;
        self
    }

    /// Output already formatted text.
    pub fn text(&mut self, text: &str) -> io::Result<ExitCode> {
        ignore_broken_pipe(writeln!(self.stdout, "{text}"))?;
        Ok(ExitCode::Success)
    }

    /// Output paragraphs, one per line or as a JSON array.
    pub fn paragraphs(&mut self, paragraphs: &[String]) -> io::Result<ExitCode> {
        let result = if self.format.is_json() {
            let json = serde_json::to_string_pretty(paragraphs)?;
            writeln!(self.stdout, "{json}")
        } else {
            paragraphs.iter().try_for_each(|p| writeln!(self.stdout, "{p}"))
        };
        ignore_broken_pipe(result)?;
        Ok(ExitCode::Success)
    }

    /// Output an error with suggestions.
    pub fn error(&mut self, error: &HelpError) -> io::Result<ExitCode> {
        if self.format.is_json() {
            let response = ErrorResponse::from(error);
            writeln!(self.stderr, "{}", serde_json::to_string_pretty(&response)?)?;
            return Ok(ExitCode::from_error(error));
        }

        if self.stderr_color {
            writeln!(self.stderr, "{} {error}", "error:".red().bold())?;
        } else {
            writeln!(self.stderr, "error: {error}")?;
        }
        for suggestion in error.recovery_suggestions() {
            writeln!(self.stderr, "  Suggestion: {suggestion}")?;
        }
        Ok(ExitCode::from_error(error))
    }

    /// Output informational message to stderr (text mode only).
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        if !self.format.is_json() {
            writeln!(self.stderr, "{message}")?;
        }
        Ok(())
    }
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed early, dropping remaining output");
            Ok(())
        }
        other => other,
    }
}
