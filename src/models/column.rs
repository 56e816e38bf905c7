use crate::errors::AppError;
use std::fmt;
use std::str::FromStr;

/// Header names of the export, in output order.
pub const HEADERS: [&str; 6] = ["date", "name", "action", "trigger", "state", "autoUnlock"];

/// Columns accepted by the secondary filter. `date` is not one of them:
/// it is handled by the date range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Action,
    Trigger,
    State,
    AutoUnlock,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Name,
        Column::Action,
        Column::Trigger,
        Column::State,
        Column::AutoUnlock,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Action => "action",
            Column::Trigger => "trigger",
            Column::State => "state",
            Column::AutoUnlock => "autoUnlock",
        }
    }
}

impl FromStr for Column {
    type Err = AppError;

    /// Exact header match, case-sensitive like the export itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.header() == s)
            .ok_or_else(|| {
                AppError::InvalidColumn(format!(
                    "'{s}' (expected one of: {})",
                    Column::ALL.map(|c| c.header()).join(", ")
                ))
            })
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
