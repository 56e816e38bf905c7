use crate::core::aggregate::{aggregate_by_date, aggregate_by_name, to_chart_series};
use crate::core::filter::{filter_by_column, filter_by_date, preview, unique_values};
use crate::core::ingest::{CsvFormat, ingest_with};
use crate::errors::AppResult;
use crate::models::{AggregateTable, LogTable, Report, SeriesPoint};
use chrono::NaiveDate;
use chrono_tz::Tz;

/// Optional column/value pair for the secondary filter.
#[derive(Debug, Clone)]
pub struct ColumnFilter {
    pub column: String,
    pub value: String,
}

/// Parameters of one report invocation.
#[derive(Debug, Clone)]
pub struct ReportParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub filter: Option<ColumnFilter>,
    pub timezone: Tz,
}

/// Stateless entry point over the pipeline stages. Every call takes its
/// inputs explicitly and returns freshly derived values.
pub struct LogAnalyzer;

impl LogAnalyzer {
    pub fn ingest(raw: &[u8], format: &CsvFormat) -> AppResult<LogTable> {
        ingest_with(raw, format)
    }

    pub fn preview(table: &LogTable, n: usize) -> LogTable {
        preview(table, n)
    }

    pub fn filter_by_date(
        table: &LogTable,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<(NaiveDate, NaiveDate, LogTable)> {
        filter_by_date(table, from, to)
    }

    pub fn filter_by_column(table: &LogTable, column: &str, value: &str) -> AppResult<LogTable> {
        filter_by_column(table, column, value)
    }

    pub fn unique_values(table: &LogTable, column: &str) -> AppResult<Vec<String>> {
        unique_values(table, column)
    }

    pub fn aggregate_by_name(table: &LogTable) -> AggregateTable {
        aggregate_by_name(table)
    }

    pub fn aggregate_by_date(table: &LogTable, tz: Tz) -> AppResult<AggregateTable> {
        aggregate_by_date(table, tz)
    }

    pub fn to_chart_series(agg: &AggregateTable, sort_by_value: bool) -> Vec<SeriesPoint> {
        to_chart_series(agg, sort_by_value)
    }

    /// Date filter, optional column filter, then both aggregates.
    /// Fails as a whole if any stage fails.
    pub fn build_report(table: &LogTable, params: &ReportParams) -> AppResult<Report> {
        let (from, to, rows) = filter_by_date(table, params.from, params.to)?;

        let rows = match &params.filter {
            Some(f) => filter_by_column(&rows, &f.column, &f.value)?,
            None => rows,
        };

        let by_name = aggregate_by_name(&rows);
        let by_date = aggregate_by_date(&rows, params.timezone)?;

        Ok(Report {
            from,
            to,
            rows,
            by_name,
            by_date,
        })
    }
}
