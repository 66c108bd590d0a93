use colored::*;
use std::path::Path;

/// Turns colouring off when asked to, or when stderr is not a terminal.
pub fn init_color(no_color: bool) {
    if no_color || !atty::is(atty::Stream::Stderr) {
        colored::control::set_override(false);
    }
}

pub fn colorize_warning(message: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), message)
}

pub fn colorize_error(message: &str) -> String {
    format!("{} {}", "Error:".red().bold(), message)
}

pub fn colorize_key(key: &str) -> ColoredString {
    key.cyan()
}

pub fn colorize_value(value: &str) -> ColoredString {
    value.bright_white()
}

pub fn colorize_path(path: &Path) -> ColoredString {
    path.display().to_string().bright_blue()
}
