//! Supporting helpers for the CLI surface.

use owo_colors::OwoColorize;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for friendly notes on stderr.
pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".cyan().to_string()
    } else {
        "note:".to_string()
    }
}
