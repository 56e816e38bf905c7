//! Decoding and projection of a raw access-log export.

use crate::errors::{AppError, AppResult};
use crate::models::column::HEADERS;
use crate::models::{LogRow, LogTable};
use csv::{ReaderBuilder, StringRecord};
use encoding_rs::Encoding;
use tracing::debug;

/// How the export is encoded on disk.
#[derive(Debug, Clone)]
pub struct CsvFormat {
    pub encoding: &'static Encoding,
    pub delimiter: u8,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::UTF_16LE,
            delimiter: b'\t',
        }
    }
}

impl CsvFormat {
    /// Build a format from config values (WHATWG encoding label, one-byte delimiter).
    pub fn from_labels(encoding: &str, delimiter: &str) -> AppResult<Self> {
        let encoding = Encoding::for_label(encoding.trim().as_bytes())
            .ok_or_else(|| AppError::Config(format!("unknown encoding '{encoding}'")))?;

        let delimiter = match delimiter.as_bytes() {
            [b] => *b,
            _ => {
                return Err(AppError::Config(format!(
                    "delimiter must be a single byte, got {delimiter:?}"
                )));
            }
        };

        Ok(Self {
            encoding,
            delimiter,
        })
    }
}

/// Ingest with the default format (UTF-16, tab separated).
pub fn ingest(raw: &[u8]) -> AppResult<LogTable> {
    ingest_with(raw, &CsvFormat::default())
}

pub fn ingest_with(raw: &[u8], format: &CsvFormat) -> AppResult<LogTable> {
    // BOM sniffing wins over the configured endianness and strips the mark
    let (text, used, had_errors) = format.encoding.decode(raw);
    if had_errors {
        return Err(AppError::Parse(format!(
            "input is not valid {} text",
            used.name()
        )));
    }
    debug!(encoding = used.name(), chars = text.len(), "decoded export");

    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let idx = column_indexes(&headers)?;

    let mut rows = Vec::new();
    for (n, record) in reader.records().enumerate() {
        let record = record?;
        let cell = |i: usize| record.get(idx[i]).unwrap_or("").to_string();

        let action = cell(2);
        if action.is_empty() {
            // header is line 1
            return Err(AppError::Parse(format!("line {}: empty 'action'", n + 2)));
        }

        let trigger = cell(3);
        let mut name = cell(1);
        if name.is_empty() {
            name = trigger.clone();
        }

        rows.push(LogRow {
            date: cell(0),
            name,
            action,
            trigger,
            state: cell(4),
            auto_unlock: cell(5),
        });
    }

    debug!(rows = rows.len(), "ingested export");
    Ok(LogTable::new(rows))
}

/// Position of each required header in the source, in `HEADERS` order.
fn column_indexes(headers: &StringRecord) -> AppResult<[usize; 6]> {
    let mut idx = [0usize; 6];
    let mut missing = Vec::new();

    for (slot, wanted) in idx.iter_mut().zip(HEADERS) {
        match headers.iter().position(|h| h == wanted) {
            Some(pos) => *slot = pos,
            None => missing.push(wanted),
        }
    }

    if missing.is_empty() {
        Ok(idx)
    } else {
        Err(AppError::Parse(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )))
    }
}
