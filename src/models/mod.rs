pub mod aggregate;
pub mod column;
pub mod log_row;
pub mod report;

pub use aggregate::{AggregateTable, SeriesPoint};
pub use column::Column;
pub use log_row::{LogRow, LogTable};
pub use report::Report;
