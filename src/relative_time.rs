//! Human-readable age of a blame timestamp.
//!
//! Only the most significant unit is shown. Years and months are rounded
//! (ties to even) from the whole number of days, while days, hours and
//! minutes are truncated. So 364 days reads "1 year ago" and 15 days stays
//! "15 days ago" while 16 days becomes "1 month ago".

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone, Utc};

use crate::error::Result;
use crate::models::BlameRecord;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SECONDS_PER_DAY: i64 = 86_400;

/// Instant of the blamed change.
///
/// Uses the zone git printed next to the timestamp; without one the
/// timestamp is read as local time.
pub fn commit_time(record: &BlameRecord) -> Result<DateTime<Utc>> {
    match &record.utc_offset {
        Some(offset) => {
            let zoned = format!("{} {}", record.timestamp, offset);
            let time = DateTime::parse_from_str(&zoned, &format!("{TIMESTAMP_FORMAT} %z"))?;
            Ok(time.with_timezone(&Utc))
        }
        None => {
            let naive = NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT)?;
            Ok(Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_else(|| naive.and_utc()))
        }
    }
}

/// "N units ago" for the time between `then` and `now`.
///
/// A `then` in the future (clock skew) counts as no time at all.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = (now - then).max(TimeDelta::zero());

    let days = delta.num_days();
    let within_day = delta.num_seconds() - days * SECONDS_PER_DAY;

    let years = (days as f64 / 365.0).round_ties_even() as i64;
    let months = (days as f64 / 30.0).round_ties_even() as i64;
    let hours = within_day / 3600;
    let minutes = within_day / 60;

    if years > 0 {
        ago(years, "year")
    } else if months > 0 {
        ago(months, "month")
    } else if days > 0 {
        ago(days, "day")
    } else if hours > 0 {
        ago(hours, "hour")
    } else if minutes > 0 {
        ago(minutes, "minute")
    } else {
        "a few seconds ago".to_string()
    }
}

fn ago(count: i64, unit: &str) -> String {
    format!("{} {}{} ago", count, unit, if count > 1 { "s" } else { "" })
}
