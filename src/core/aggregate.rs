use crate::errors::AppResult;
use crate::models::{AggregateTable, LogTable, SeriesPoint};
use crate::utils::date::local_day;
use chrono_tz::Tz;
use tracing::debug;

/// Number of rows per member name (or trigger, for memberless entries).
pub fn aggregate_by_name(table: &LogTable) -> AggregateTable {
    let agg = AggregateTable::from_keys(table.iter().map(|r| r.name.as_str()));
    debug!(rows = agg.total_actions(), names = agg.total_groups(), "aggregated by name");
    agg
}

/// Number of rows per local calendar day in `tz`.
///
/// Timestamps are converted before truncation, so an entry at 23:30 UTC may
/// count for the next local day.
pub fn aggregate_by_date(table: &LogTable, tz: Tz) -> AppResult<AggregateTable> {
    let days = table
        .iter()
        .map(|r| {
            r.timestamp()
                .map(|ts| local_day(ts, tz).format("%Y-%m-%d").to_string())
        })
        .collect::<AppResult<Vec<String>>>()?;

    let agg = AggregateTable::from_keys(days);
    debug!(rows = agg.total_actions(), days = agg.total_days(), %tz, "aggregated by date");
    Ok(agg)
}

/// (key, count) pairs for a bar chart.
///
/// With `sort_by_value` the bars are ordered by descending count; the sort is
/// stable, so equal counts keep their first-seen order.
pub fn to_chart_series(agg: &AggregateTable, sort_by_value: bool) -> Vec<SeriesPoint> {
    let mut series = agg.entries().to_vec();
    if sort_by_value {
        series.sort_by(|a, b| b.count.cmp(&a.count));
    }
    series
}
