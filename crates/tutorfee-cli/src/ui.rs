//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// A styled section header.
#[must_use]
pub fn header(text: &str, color: bool) -> String {
    if color {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    } else {
        format!("=== {text} ===")
    }
}

/// Marker for a subject fee reduced by the cap.
#[must_use]
pub fn capped_marker(color: bool) -> String {
    if color {
        style("[capped]").yellow().to_string()
    } else {
        "[capped]".to_string()
    }
}

/// A styled total line value.
#[must_use]
pub fn emphasis(text: &str, color: bool) -> String {
    if color {
        style(text).green().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
