/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Wrap `value` in `color` when colors are enabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Empty cells are shown in grey so they stand out from real values.
pub fn colorize_optional(value: &str, enabled: bool) -> String {
    if value.trim().is_empty() {
        paint("-", GREY, enabled)
    } else {
        value.to_string()
    }
}
