use crate::errors::{AppError, AppResult};
use crate::models::{Column, LogTable};
use crate::utils::date::start_of_day;
use chrono::{Days, NaiveDate};
use tracing::debug;

/// Restrict `table` to the calendar days `from..=to` (UTC).
///
/// Missing bounds default to the day of the oldest (`from`) and newest
/// (`to`) row. The returned upper bound is already normalized to the day
/// after `to`, so the range is `[from, to + 1 day)`. An inverted range is
/// not an error and simply matches nothing.
pub fn filter_by_date(
    table: &LogTable,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> AppResult<(NaiveDate, NaiveDate, LogTable)> {
    let (Some(newest), Some(oldest)) = (table.first(), table.last()) else {
        return Err(AppError::InsufficientData(
            "the log is empty, no default date range available".to_string(),
        ));
    };

    let from = match from {
        Some(d) => d,
        None => oldest.timestamp()?.date_naive(),
    };
    let to = match to {
        Some(d) => d,
        None => newest.timestamp()?.date_naive(),
    };
    let to = to
        .checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::InvalidDate(format!("{to} is out of range")))?;

    let lower = start_of_day(from);
    let upper = start_of_day(to);

    let mut rows = Vec::new();
    for row in table {
        let ts = row.timestamp()?;
        if ts >= lower && ts < upper {
            rows.push(row.clone());
        }
    }

    debug!(%from, %to, before = table.len(), after = rows.len(), "date filter");
    Ok((from, to, LogTable::new(rows)))
}

/// Keep the rows whose `column` equals `value` exactly.
pub fn filter_by_column(table: &LogTable, column: &str, value: &str) -> AppResult<LogTable> {
    let column: Column = column.parse()?;

    let filtered: LogTable = table
        .iter()
        .filter(|r| r.field(column) == value)
        .cloned()
        .collect();

    debug!(%column, value, before = table.len(), after = filtered.len(), "column filter");
    Ok(filtered)
}

/// Distinct values of `column`, in first-seen order.
pub fn unique_values(table: &LogTable, column: &str) -> AppResult<Vec<String>> {
    let column: Column = column.parse()?;

    let mut values: Vec<String> = Vec::new();
    for row in table {
        let v = row.field(column);
        if !values.iter().any(|x| x == v) {
            values.push(v.to_string());
        }
    }

    Ok(values)
}

/// The newest `n` rows.
pub fn preview(table: &LogTable, n: usize) -> LogTable {
    table.iter().take(n).cloned().collect()
}
