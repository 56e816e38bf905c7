//! Table rendering utilities for CLI outputs.

use crate::models::LogTable;
use crate::models::column::HEADERS;
use crate::utils::colors::colorize_optional;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths from the widest cell (display width, not bytes).
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }
        widths
    }

    pub fn render(&self, color: bool) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (h, w) in self.headers.iter().zip(&widths) {
            out.push_str(&pad(h, *w));
        }
        out.push('\n');
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (cell, w) in row.iter().zip(&widths) {
                // padding computed on the plain text, ANSI codes have no width
                let shown = colorize_optional(cell, color);
                let plain_width = if cell.trim().is_empty() { 1 } else { cell.width() };
                out.push_str(&shown);
                out.push_str(&" ".repeat(w.saturating_sub(plain_width) + 1));
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize) -> String {
    format!("{s}{} ", " ".repeat(width.saturating_sub(s.width())))
}

/// Render log rows with the export's column headers.
pub fn log_table(table: &LogTable) -> Table {
    let mut t = Table::new(&HEADERS);
    for row in table {
        t.add_row(row.to_record());
    }
    t
}
