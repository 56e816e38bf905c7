use super::{aggregate::AggregateTable, log_row::LogTable};
use chrono::NaiveDate;

/// Everything one report invocation produces.
#[derive(Debug, Clone)]
pub struct Report {
    pub from: NaiveDate, // inclusive
    pub to: NaiveDate,   // exclusive (selected end date + 1 day)
    pub rows: LogTable,
    pub by_name: AggregateTable,
    pub by_date: AggregateTable,
}

impl Report {
    /// Last calendar day covered by the range, as the user selected it.
    pub fn selected_to(&self) -> NaiveDate {
        self.to.pred_opt().unwrap_or(self.to)
    }
}
