//! Utilities module - Console reporting helpers

use colored::*;

/// Print a progress step
pub fn step(message: &str) {
    println!("   {} {}", "→".bright_blue(), message);
}

/// Print a success line
pub fn success(message: &str) {
    println!("   {} {}", "✓".bright_green(), message);
}

/// Print a warning line
pub fn warn(message: &str) {
    println!("   {} {}", "⚠".bright_yellow(), message);
}

/// Render a path for use inside report lines
pub fn path(display: impl std::fmt::Display) -> ColoredString {
    display.to_string().bright_cyan()
}
