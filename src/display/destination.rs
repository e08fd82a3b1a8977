//! Output destinations and their color capability.
//!
//! Every styling call takes a destination explicitly instead of consulting
//! process-wide state, so the same text can be rendered for a terminal and
//! for a pipe side by side.

use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::io;

/// Something help text is written to.
pub trait Destination {
    /// Whether ANSI styling should be emitted for this destination.
    fn is_color_capable(&self) -> bool;
}

impl<D: Destination + ?Sized> Destination for &D {
    fn is_color_capable(&self) -> bool {
        (**self).is_color_capable()
    }
}

/// User preference for colored output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when writing to a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    /// Always emit styling
    Always,
    /// Never emit styling
    Never,
}

/// A stream that may or may not be attached to a terminal.
#[derive(Debug)]
pub struct Terminal<S> {
    stream: S,
    choice: ColorChoice,
    no_color: bool,
}

impl<S: IsTerminal> Terminal<S> {
    /// Wrap a stream. `NO_COLOR` is read once, here.
    pub fn new(stream: S, choice: ColorChoice) -> Self {
        Self {
            stream,
            choice,
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }

    /// Override the captured `NO_COLOR` state.
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }
}

impl Terminal<io::Stdout> {
    pub fn stdout(choice: ColorChoice) -> Self {
        Self::new(io::stdout(), choice)
    }
}

impl Terminal<io::Stderr> {
    pub fn stderr(choice: ColorChoice) -> Self {
        Self::new(io::stderr(), choice)
    }
}

impl<S: IsTerminal> Destination for Terminal<S> {
    fn is_color_capable(&self) -> bool {
        match self.choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => !self.no_color && self.stream.is_terminal(),
        }
    }
}

/// A destination whose capability is known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed {
    color: bool,
}

impl Fixed {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }
}

impl From<bool> for Fixed {
    fn from(color: bool) -> Self {
        Self { color }
    }
}

impl Destination for Fixed {
    fn is_color_capable(&self) -> bool {
        self.color
    }
}
