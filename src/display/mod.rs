//! Help text display utilities.
//!
//! Provides paragraph splitting, word wrapping and themed styling of
//! titles, command names and option names for command-line help.

pub mod destination;
pub mod help;
pub mod theme;
pub mod wrap;

pub use destination::{ColorChoice, Destination, Fixed, Terminal};
pub use help::{HelpFormatter, format_as_command_name, format_as_option_name, format_as_title};
pub use theme::{StyleTag, THEME, Theme, apply_style};
pub use wrap::{split_into_paragraphs, wrap_and_indent};
