//! Reading help text from files or standard input.

use crate::error::{HelpError, HelpResult};
use std::io::Read;
use std::path::Path;

/// Read the whole input, from `path` when given and stdin otherwise.
///
/// A path of `-` also means stdin.
pub fn read_input(path: Option<&Path>) -> HelpResult<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!("reading input from {}", path.display());
            std::fs::read_to_string(path).map_err(|source| HelpError::InputRead {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            tracing::debug!("reading input from stdin");
            read_from(std::io::stdin().lock())
        }
    }
}

/// Read everything from a reader.
pub fn read_from<R: Read>(mut reader: R) -> HelpResult<String> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .map_err(|source| HelpError::StdinRead { source })?;
    Ok(buffer)
}
