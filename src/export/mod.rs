// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export.
pub(crate) fn notify_export_success(label: &str, count: usize, path: &Path) {
    success(format!(
        "{label} export completed ({count} records): {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

/// What to write out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    /// Filtered log rows
    Rows,
    /// Per-name counts, highest first
    Names,
    /// Per-day counts
    Dates,
}
