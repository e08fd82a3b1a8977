//! Consistent color theme and styling for help output.

use crate::config::ThemeConfig;
use crate::display::destination::Destination;
use crate::error::{HelpError, HelpResult};
use console::Style;
use std::sync::LazyLock;

/// Default theme used by the free styling functions.
pub static THEME: LazyLock<Theme> = LazyLock::new(Theme::default);

/// Symbolic style names mapped to terminal styling by a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Plain emphasis
    Bold,
    /// Section titles
    Title,
    /// Command names
    CommandName,
    /// Option names
    OptionName,
}

/// Color theme for help output.
///
/// Styles are forced on: whether styling is wanted at all is decided by the
/// [`Destination`], not by `console`'s own terminal detection.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Section titles (attention)
    pub title: Style,
    /// Command names (success)
    pub command: Style,
    /// Option names (caution)
    pub option: Style,
    /// Emphasized text
    pub emphasis: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::new().red().bold().force_styling(true),
            command: Style::new().green().force_styling(true),
            option: Style::new().yellow().force_styling(true),
            emphasis: Style::new().bold().force_styling(true),
        }
    }
}

impl Theme {
    /// Build a theme from dotted style strings such as `"red.bold"`.
    pub fn from_config(config: &ThemeConfig) -> HelpResult<Self> {
        Ok(Self {
            title: parse_style("title", &config.title)?,
            command: parse_style("command", &config.command)?,
            option: parse_style("option", &config.option)?,
            emphasis: Style::new().bold().force_styling(true),
        })
    }

    /// Style registered for a tag.
    pub fn style_for(&self, tag: StyleTag) -> &Style {
        match tag {
            StyleTag::Bold => &self.emphasis,
            StyleTag::Title => &self.title,
            StyleTag::CommandName => &self.command,
            StyleTag::OptionName => &self.option,
        }
    }

    /// Style `text` unconditionally.
    pub fn apply_style(&self, text: &str, tag: StyleTag) -> String {
        self.style_for(tag).apply_to(text).to_string()
    }

    /// Style `text` only when the destination supports color.
    pub fn apply<D: Destination + ?Sized>(&self, dest: &D, text: &str, tag: StyleTag) -> String {
        if dest.is_color_capable() {
            self.apply_style(text, tag)
        } else {
            text.to_string()
        }
    }
}

/// Style `text` with the default theme.
pub fn apply_style(text: &str, tag: StyleTag) -> String {
    THEME.apply_style(text, tag)
}

const COLORS: &[&str] = &[
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

const ATTRIBUTES: &[&str] = &[
    "bold",
    "dim",
    "italic",
    "underlined",
    "blink",
    "blink_fast",
    "reverse",
    "hidden",
    "strikethrough",
    "bright",
    "on_bright",
];

fn is_known_part(part: &str) -> bool {
    let color = part.strip_prefix("on_").unwrap_or(part);
    COLORS.contains(&color) || color.parse::<u8>().is_ok() || ATTRIBUTES.contains(&part)
}

fn parse_style(entry: &str, spec: &str) -> HelpResult<Style> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Ok(Style::new().force_styling(true));
    }

    if let Some(bad) = spec.split('.').find(|part| !is_known_part(part)) {
        tracing::debug!("rejecting style part '{bad}' in theme entry '{entry}'");
        return Err(HelpError::InvalidStyle {
            entry: entry.to_string(),
            spec: spec.to_string(),
        });
    }

    Ok(Style::from_dotted_str(spec).force_styling(true))
}
