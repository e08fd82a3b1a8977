//! The main library module for helpfmt

pub mod config;
pub mod display;
pub mod error;
pub mod io;

// Explicit exports for better API clarity
pub use config::Settings;
pub use display::{
    ColorChoice, Destination, Fixed, HelpFormatter, StyleTag, Terminal, Theme, apply_style,
    format_as_command_name, format_as_option_name, format_as_title, split_into_paragraphs,
    wrap_and_indent,
};
pub use error::{HelpError, HelpResult};
