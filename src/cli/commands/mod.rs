pub mod config;
pub mod export;
pub mod filter;
pub mod preview;
pub mod report;

use crate::cli::parser::RangeArgs;
use crate::config::Config;
use crate::core::{ColumnFilter, LogAnalyzer};
use crate::errors::AppResult;
use crate::models::LogTable;
use crate::utils::date::parse_date;
use crate::utils::path::read_input;
use chrono::NaiveDate;
use tracing::info;

/// Read and ingest an export with the configured encoding and delimiter.
pub(crate) fn load_table(file: &str, cfg: &Config) -> AppResult<LogTable> {
    let raw = read_input(file)?;
    info!(file, bytes = raw.len(), "loading export");
    LogAnalyzer::ingest(&raw, &cfg.csv_format()?)
}

pub(crate) fn resolve_range(range: &RangeArgs) -> AppResult<(Option<NaiveDate>, Option<NaiveDate>)> {
    let from = range.from.as_deref().map(parse_date).transpose()?;
    let to = range.to.as_deref().map(parse_date).transpose()?;
    Ok((from, to))
}

pub(crate) fn column_filter(column: &Option<String>, value: &Option<String>) -> Option<ColumnFilter> {
    match (column, value) {
        (Some(column), Some(value)) => Some(ColumnFilter {
            column: column.clone(),
            value: value.clone(),
        }),
        _ => None,
    }
}
