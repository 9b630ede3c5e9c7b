//! Output formatting utilities

use console::style;

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Report a reference whose title could not be fetched
pub fn fetch_error(url: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), url);
}
