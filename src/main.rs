//! CLI entry point for the help text formatter.
//!
//! Reads help text from a file or stdin and prints it wrapped, indented or
//! split into paragraphs, and styles titles, command names and option names.

use clap::{
    Parser, Subcommand, ValueEnum,
    builder::styling::{AnsiColor, Effects, Styles},
};
use helpfmt::display::{ColorChoice, HelpFormatter, Terminal, split_into_paragraphs};
use helpfmt::io::{ExitCode, OutputFormat, OutputManager, read_input};
use helpfmt::{HelpError, HelpResult, Settings};
use std::path::PathBuf;
use tracing::Level;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Command-line help text formatter
#[derive(Parser)]
#[command(
    name = "helpfmt",
    version = env!("CARGO_PKG_VERSION"),
    about = "Wrap, indent and color command-line help text",
    long_about = "Split help text into paragraphs, wrap and indent it to a width, \
                  and style titles, command names and option names for terminals.",
    styles = clap_cargo_style(),
    after_help = "Examples:\n  helpfmt wrap README.txt --width 60 --indent 2\n  cat help.txt | helpfmt paragraphs --json\n  helpfmt style title options --color always\n  helpfmt section description help.txt"
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// When to color output (overrides [color] mode)
    #[arg(long, global = true, value_enum)]
    color: Option<ColorChoice>,

    /// Log debug information to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap and indent text
    Wrap {
        /// Input file (stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Maximum line width, indentation included
        #[arg(short, long)]
        width: Option<usize>,

        /// Number of spaces in front of each line
        #[arg(short, long)]
        indent: Option<usize>,

        /// Omit the indentation of the very first line
        #[arg(long)]
        first_line_indented: bool,
    },

    /// Print the paragraphs of the input, one per line
    Paragraphs {
        /// Input file (stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Output as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Style a single string as a title, command name or option name
    Style {
        #[arg(value_enum)]
        kind: StyleKind,

        text: String,
    },

    /// Print a titled help section
    Section {
        title: String,

        /// Input file (stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Maximum line width, indentation included
        #[arg(short, long)]
        width: Option<usize>,

        /// Number of spaces in front of each line
        #[arg(short, long)]
        indent: Option<usize>,
    },

    /// Create .helpfmt/settings.toml with default settings
    Init {
        /// Overwrite an existing settings file
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleKind {
    Title,
    Command,
    Option,
}

fn main() {
    let cli = Cli::parse();

    let (settings, warning) = match load_settings(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            let mut output =
                OutputManager::new(OutputFormat::Text, cli.color.unwrap_or_default());
            let code = output.error(&e).unwrap_or_else(|_| ExitCode::from_error(&e));
            std::process::exit(code.into());
        }
    };

    init_logging(cli.debug || settings.debug);
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let color = cli.color.unwrap_or(settings.color.mode);
    let format = match &cli.command {
        Commands::Paragraphs { json, .. } => OutputFormat::from_json_flag(*json),
        _ => OutputFormat::Text,
    };
    let mut output = OutputManager::new(format, color);

    let code = match run(&cli, settings, color, &mut output) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            output.error(&e).unwrap_or_else(|_| ExitCode::from_error(&e))
        }
    };

    std::process::exit(code.into());
}

/// An explicit `--config` must load; a discovered one falls back to defaults.
fn load_settings(cli: &Cli) -> HelpResult<(Settings, Option<String>)> {
    if let Some(path) = &cli.config {
        return Ok((Settings::load_from(path)?, None));
    }

    match Settings::load() {
        Ok(settings) => Ok((settings, None)),
        Err(e) => Ok((
            Settings::default(),
            Some(format!("{e}; using default configuration")),
        )),
    }
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn apply_layout(settings: &mut Settings, width: Option<usize>, indent: Option<usize>) {
    if let Some(width) = width {
        settings.layout.width = width;
    }
    if let Some(indent) = indent {
        settings.layout.indentation = indent;
    }
}

fn written(result: std::io::Result<ExitCode>) -> HelpResult<ExitCode> {
    result.map_err(|source| HelpError::OutputWrite { source })
}

fn run(
    cli: &Cli,
    mut settings: Settings,
    color: ColorChoice,
    output: &mut OutputManager,
) -> HelpResult<ExitCode> {
    let stdout = Terminal::stdout(color);

    match &cli.command {
        Commands::Wrap {
            file,
            width,
            indent,
            first_line_indented,
        } => {
            apply_layout(&mut settings, *width, *indent);
            let formatter = HelpFormatter::from_settings(&settings)?;
            let text = read_input(file.as_deref())?;
            written(output.text(&formatter.wrap(&text, *first_line_indented)))
        }

        Commands::Paragraphs { file, .. } => {
            let text = read_input(file.as_deref())?;
            written(output.paragraphs(&split_into_paragraphs(&text)))
        }

        Commands::Style { kind, text } => {
            let formatter = HelpFormatter::from_settings(&settings)?;
            let styled = match kind {
                StyleKind::Title => formatter.format_as_title(text, &stdout),
                StyleKind::Command => formatter.format_as_command_name(text, &stdout),
                StyleKind::Option => formatter.format_as_option_name(text, &stdout),
            };
            written(output.text(&styled))
        }

        Commands::Section {
            title,
            file,
            width,
            indent,
        } => {
            apply_layout(&mut settings, *width, *indent);
            let formatter = HelpFormatter::from_settings(&settings)?;
            let text = read_input(file.as_deref())?;
            written(output.text(&formatter.format_help_section(title, &text, &stdout)))
        }

        Commands::Init { force } => {
            let path = Settings::init_config_file(*force)?;
            written(
                output
                    .info(&format!("Created configuration file at: {}", path.display()))
                    .map(|()| ExitCode::Success),
            )
        }

        Commands::Config => {
            let toml_str = toml::to_string_pretty(&settings).map_err(|e| HelpError::Config {
                reason: e.to_string(),
            })?;
            written(output.text(toml_str.trim_end()))
        }
    }
}
