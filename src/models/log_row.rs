use crate::errors::AppResult;
use crate::models::column::Column;
use crate::utils::date::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One access-log entry, restricted to the six columns the analysis uses.
///
/// All fields are kept as the raw text of the export; `date` is parsed on
/// demand through [`LogRow::timestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRow {
    pub date: String,
    pub name: String,
    pub action: String,
    pub trigger: String,
    pub state: String,
    #[serde(rename = "autoUnlock")]
    pub auto_unlock: String,
}

impl LogRow {
    /// Parse `date` as a UTC instant.
    pub fn timestamp(&self) -> AppResult<DateTime<Utc>> {
        parse_timestamp(&self.date)
    }

    /// Value of a filterable column.
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Action => &self.action,
            Column::Trigger => &self.trigger,
            Column::State => &self.state,
            Column::AutoUnlock => &self.auto_unlock,
        }
    }

    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.name.clone(),
            self.action.clone(),
            self.trigger.clone(),
            self.state.clone(),
            self.auto_unlock.clone(),
        ]
    }
}

/// Rows in source order (newest first). Every pipeline stage returns a new
/// table instead of mutating its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogTable {
    rows: Vec<LogRow>,
}

impl LogTable {
    pub fn new(rows: Vec<LogRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[LogRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Newest entry.
    pub fn first(&self) -> Option<&LogRow> {
        self.rows.first()
    }

    /// Oldest entry.
    pub fn last(&self) -> Option<&LogRow> {
        self.rows.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRow> {
        self.rows.iter()
    }
}

impl FromIterator<LogRow> for LogTable {
    fn from_iter<I: IntoIterator<Item = LogRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LogTable {
    type Item = &'a LogRow;
    type IntoIter = std::slice::Iter<'a, LogRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
