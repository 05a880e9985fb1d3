//! Terminal output helpers for CLI handlers.
//!
//! Colors are applied only when stdout supports them.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

/// Print a section header.
pub fn section(title: &str) {
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!(
        "  {:<16} {}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        value
    );
}

/// Print a success line.
pub fn success(message: &str) {
    println!(
        "  {} {}",
        "✓".if_supports_color(Stream::Stdout, |t| t.green()),
        message
    );
}
