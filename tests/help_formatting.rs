//! End-to-end help rendering for plain and color-capable destinations.

use console::strip_ansi_codes;
use helpfmt::{
    ColorChoice, Destination, Fixed, HelpFormatter, Settings, Terminal, format_as_command_name,
    format_as_option_name, format_as_title,
};

fn render<D: Destination>(formatter: &HelpFormatter, dest: &D) -> String {
    let mut help = String::new();
    help.push_str(&formatter.format_help_section(
        "usage",
        "nanoc compile [options]",
        dest,
    ));
    help.push_str("\n\n");
    help.push_str(&formatter.format_help_section(
        "description",
        "Compile all items of the current site.\n\nThe compiler writes only changed items.",
        dest,
    ));
    help.push_str("\n\n");
    help.push_str(&formatter.format_as_title("options", dest));
    help.push('\n');
    help.push_str(&formatter.format_option_description(
        Some('h'),
        Some("help"),
        "show the help message and quit",
        dest,
    ));
    help.push('\n');
    help.push_str(&formatter.format_command_description("view", "start the web server", dest));
    help
}

#[test]
fn plain_destination_gets_plain_help() {
    println!("\n=== TEST: Plain help rendering ===");

    let formatter = HelpFormatter::new(40, 20);
    let help = render(&formatter, &Fixed::plain());
    println!("{help}");

    let expected = "USAGE\n\
                    \x20                   nanoc compile\n\
                    \x20                   [options]\n\
                    \n\
                    DESCRIPTION\n\
                    \x20                   Compile all items\n\
                    \x20                   of the current\n\
                    \x20                   site.\n\
                    \n\
                    \x20                   The compiler writes\n\
                    \x20                   only changed items.\n\
                    \n\
                    OPTIONS\n\
                    \x20 -h --help         show the help\n\
                    \x20                   message and quit\n\
                    \x20 view              start the web\n\
                    \x20                   server";
    assert_eq!(help, expected);
    assert!(!help.contains('\u{1b}'));
}

#[test]
fn colored_destination_only_adds_styling() {
    let formatter = HelpFormatter::new(40, 20);
    let plain = render(&formatter, &Fixed::plain());
    let colored = render(&formatter, &Fixed::colored());

    assert_ne!(plain, colored);
    assert_eq!(strip_ansi_codes(&colored), plain);
}

#[test]
fn free_functions_follow_destination() {
    let plain = Fixed::plain();
    let colored = Fixed::colored();

    assert_eq!(format_as_title("Examples", &plain), "EXAMPLES");
    assert_eq!(format_as_command_name("build", &plain), "build");
    assert_eq!(format_as_option_name("--output", &plain), "--output");

    let title = format_as_title("Examples", &colored);
    let command = format_as_command_name("build", &colored);
    let option = format_as_option_name("--output", &colored);
    assert_eq!(strip_ansi_codes(&title), "EXAMPLES");
    assert_eq!(strip_ansi_codes(&command), "build");
    assert_eq!(strip_ansi_codes(&option), "--output");
    assert_ne!(command, "build");
    assert_ne!(option, "--output");
}

#[test]
fn terminal_destination_honors_choice_and_no_color() {
    let file = tempfile::tempfile().unwrap();
    let forced = Terminal::new(file, ColorChoice::Always);
    assert!(format_as_command_name("build", &forced).contains('\u{1b}'));

    let file = tempfile::tempfile().unwrap();
    let auto = Terminal::new(file, ColorChoice::Auto).with_no_color(true);
    assert_eq!(format_as_command_name("build", &auto), "build");
}

#[test]
fn formatter_uses_configured_theme() {
    let mut settings = Settings::default();
    settings.layout.width = 30;
    settings.layout.indentation = 2;
    settings.theme.command = "blue.underlined".to_string();

    let formatter = HelpFormatter::from_settings(&settings).unwrap();
    let custom = formatter.format_as_command_name("build", &Fixed::colored());
    let default = format_as_command_name("build", &Fixed::colored());

    assert_ne!(custom, default);
    assert_eq!(strip_ansi_codes(&custom), "build");
    assert_eq!(formatter.wrap("a b c", false), "  a b c");
}
