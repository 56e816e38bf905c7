use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// Section title, e.g. "Accesses per name from 2025-01-01 to 2025-01-31"
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}{}=== {} ==={}", BLUE, BOLD, msg, RESET);
}

/// Single "label: value" figure, like the record counter under each filter
pub fn metric<T: fmt::Display>(label: &str, value: T) {
    println!("{}{} {}{}", BOLD, label, value, RESET);
}
