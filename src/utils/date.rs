use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a `YYYY-MM-DD` date coming from the command line.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(format!("'{s}' (expected YYYY-MM-DD)")))
}

/// Parse a timestamp of the export as a UTC instant.
///
/// Accepts RFC 3339 with any offset, naive date-times (taken as UTC) and a
/// bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ndt.and_utc());
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(start_of_day(d));
    }

    Err(AppError::InvalidTimestamp(format!("'{s}'")))
}

/// Midnight UTC of the given calendar date.
pub fn start_of_day(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(NaiveTime::MIN).and_utc()
}

/// Local calendar day of a UTC instant in `tz`.
pub fn local_day(ts: DateTime<Utc>, tz: Tz) -> NaiveDate {
    ts.with_timezone(&tz).date_naive()
}

pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::InvalidTimezone(name.to_string()))
}
