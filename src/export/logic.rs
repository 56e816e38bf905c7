// src/export/logic.rs

use crate::core::to_chart_series;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, ExportTarget, notify_export_success};
use crate::models::Report;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use serde::Serialize;
use std::path::Path;

/// High level export of a computed report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write one part of `report` to `file`.
    ///
    /// - `Rows`: the filtered log rows, newest first
    /// - `Names`: per-name counts, highest first (same order as the chart)
    /// - `Dates`: per-day counts, in aggregate order
    ///
    /// Nothing is written when the selection is empty.
    pub fn export(
        report: &Report,
        target: ExportTarget,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        match target {
            ExportTarget::Rows => write(report.rows.rows(), "Rows", format, &path, force),
            ExportTarget::Names => {
                let series = to_chart_series(&report.by_name, true);
                write(&series, "Names", format, &path, force)
            }
            ExportTarget::Dates => {
                let series = to_chart_series(&report.by_date, false);
                write(&series, "Dates", format, &path, force)
            }
        }
    }
}

fn write<T: Serialize>(
    items: &[T],
    label: &str,
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    if items.is_empty() {
        warning("No records found for the selected range, nothing exported.");
        return Ok(());
    }

    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => export_csv(items, path)?,
        ExportFormat::Json => export_json(items, path)?,
    }

    notify_export_success(&format!("{label} {}", format.as_str()), items.len(), path);
    Ok(())
}
