use std::fmt;

use colored::Colorize;

/// Applies the configured color preference globally. The `colored` crate
/// still disables itself on non-tty output.
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

pub fn info(message: impl fmt::Display) {
    println!("{} {}", "[i]".cyan(), message);
}

pub fn success(message: impl fmt::Display) {
    println!("{} {}", "[ok]".green(), message);
}

pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "[!]".yellow(), message);
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "[x]".red(), message);
}

/// Plain line without a label, used for list rows and help text.
pub fn line(message: impl fmt::Display) {
    println!("{message}");
}
