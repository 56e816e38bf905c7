pub mod aggregate;
pub mod filter;
pub mod ingest;
pub mod logic;

pub use aggregate::{aggregate_by_date, aggregate_by_name, to_chart_series};
pub use filter::{filter_by_column, filter_by_date, preview, unique_values};
pub use ingest::{CsvFormat, ingest, ingest_with};
pub use logic::{ColumnFilter, LogAnalyzer, ReportParams};
