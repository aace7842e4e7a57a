//! Output formatting utilities

use console::{style, Style};

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", style("!").yellow().bold(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Style for partner names
pub fn partner_style() -> Style {
    Style::new().cyan()
}

/// Style for integration scopes
pub fn scope_style() -> Style {
    Style::new().yellow()
}
