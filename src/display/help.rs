//! Custom help formatting for consistent CLI display.
//! This module provides functions to format help sections, titles, command
//! names and option names for a given destination.

use crate::config::Settings;
use crate::display::destination::Destination;
use crate::display::theme::{StyleTag, THEME, Theme};
use crate::display::wrap::wrap_and_indent;
use crate::error::HelpResult;

/// Default total line width, indentation included.
pub const DEFAULT_WIDTH: usize = 78;

/// Default indentation of wrapped text.
pub const DEFAULT_INDENTATION: usize = 4;

/// Gutter in front of command and option labels.
const LABEL_GUTTER: &str = "  ";

/// Format a string as a section title.
///
/// The title is always uppercased; color-capable destinations also get the
/// title style.
pub fn format_as_title<D: Destination + ?Sized>(s: &str, dest: &D) -> String {
    THEME.apply(dest, &s.to_uppercase(), StyleTag::Title)
}

/// Format a string as the name of a command.
pub fn format_as_command_name<D: Destination + ?Sized>(s: &str, dest: &D) -> String {
    THEME.apply(dest, s, StyleTag::CommandName)
}

/// Format a string as the name of an option.
pub fn format_as_option_name<D: Destination + ?Sized>(s: &str, dest: &D) -> String {
    THEME.apply(dest, s, StyleTag::OptionName)
}

/// Renders help text with a fixed layout and theme.
#[derive(Debug, Clone)]
pub struct HelpFormatter {
    theme: Theme,
    width: usize,
    indentation: usize,
}

impl Default for HelpFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_INDENTATION)
    }
}

impl HelpFormatter {
    /// Create a formatter with the default theme.
    pub fn new(width: usize, indentation: usize) -> Self {
        Self {
            theme: Theme::default(),
            width,
            indentation,
        }
    }

    /// Create a formatter from loaded settings.
    pub fn from_settings(settings: &Settings) -> HelpResult<Self> {
        settings.validate()?;
        Ok(Self {
            theme: Theme::from_config(&settings.theme)?,
            width: settings.layout.width,
            indentation: settings.layout.indentation,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn indentation(&self) -> usize {
        self.indentation
    }

    /// Wrap and indent text with this formatter's layout.
    pub fn wrap(&self, text: &str, first_line_already_indented: bool) -> String {
        wrap_and_indent(
            text,
            self.width,
            self.indentation,
            first_line_already_indented,
        )
    }

    pub fn format_as_title<D: Destination + ?Sized>(&self, s: &str, dest: &D) -> String {
        self.theme.apply(dest, &s.to_uppercase(), StyleTag::Title)
    }

    pub fn format_as_command_name<D: Destination + ?Sized>(&self, s: &str, dest: &D) -> String {
        self.theme.apply(dest, s, StyleTag::CommandName)
    }

    pub fn format_as_option_name<D: Destination + ?Sized>(&self, s: &str, dest: &D) -> String {
        self.theme.apply(dest, s, StyleTag::OptionName)
    }

    /// Format a titled section: the title on its own line, then the content
    /// wrapped and indented.
    pub fn format_help_section<D: Destination + ?Sized>(
        &self,
        title: &str,
        content: &str,
        dest: &D,
    ) -> String {
        let mut output = self.format_as_title(title, dest);
        output.push('\n');
        output.push_str(&self.wrap(content, false));
        output
    }

    /// Format a command name followed by its description.
    pub fn format_command_description<D: Destination + ?Sized>(
        &self,
        name: &str,
        description: &str,
        dest: &D,
    ) -> String {
        let styled = self.format_as_command_name(name, dest);
        self.format_labeled(name, &styled, description)
    }

    /// Format an option label such as `-v --verbose` followed by its
    /// description.
    pub fn format_option_description<D: Destination + ?Sized>(
        &self,
        short: Option<char>,
        long: Option<&str>,
        description: &str,
        dest: &D,
    ) -> String {
        let label = match (short, long) {
            (Some(s), Some(l)) => format!("-{s} --{l}"),
            (Some(s), None) => format!("-{s}"),
            (None, Some(l)) => format!("    --{l}"),
            (None, None) => String::new(),
        };
        let styled = if label.is_empty() {
            label.clone()
        } else {
            self.format_as_option_name(&label, dest)
        };
        self.format_labeled(&label, &styled, description)
    }

    /// Lay out `label` in the gutter and the description from the
    /// indentation column on. Padding is computed on the unstyled label.
    fn format_labeled(&self, label: &str, styled: &str, description: &str) -> String {
        let used = LABEL_GUTTER.len() + label.chars().count();

        if description.trim().is_empty() {
            return format!("{LABEL_GUTTER}{styled}");
        }

        if used < self.indentation {
            let padding = " ".repeat(self.indentation - used);
            format!(
                "{LABEL_GUTTER}{styled}{padding}{}",
                self.wrap(description, true)
            )
        } else {
            format!("{LABEL_GUTTER}{styled}\n{}", self.wrap(description, false))
        }
    }
}
