//! Unified application error type.
//! Every stage of the pipeline (ingest, filters, aggregates) and every CLI
//! handler returns AppError, so a failure anywhere aborts the invocation and
//! surfaces as a single message in main.rs.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Ingestion
    // ---------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    // ---------------------------
    // Pipeline errors
    // ---------------------------
    #[error("Not enough data: {0}")]
    InsufficientData(String),

    #[error("Invalid filter column: {0}")]
    InvalidColumn(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
