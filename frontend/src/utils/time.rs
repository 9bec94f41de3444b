use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::config;

pub const STILL_CHECKED_IN: &str = "Still checked in";

const TIMESTAMP_FORMAT: &str = "%B %-d, %Y, %I:%M %p";
const TIME_OF_DAY_FORMAT: &str = "%I:%M %p";
const DATE_FORMAT: &str = "%B %-d, %Y";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    #[error("check-out {check_out} precedes check-in {check_in}")]
    CheckOutBeforeCheckIn {
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
    },
}

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

/// Wall-clock "now" in the display time zone, comparable with record timestamps.
pub fn now_local() -> NaiveDateTime {
    now_in_app_tz().naive_local()
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// `"January 1, 2024, 09:05 AM"`
pub fn format_timestamp(t: &NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// `"09:05 AM"`
pub fn format_time_of_day(t: &NaiveDateTime) -> String {
    t.format(TIME_OF_DAY_FORMAT).to_string()
}

/// `"June 30, 2025"`
pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Whole minutes between the two instants, half a minute rounding up.
pub fn elapsed_minutes(
    check_in: &NaiveDateTime,
    check_out: &NaiveDateTime,
) -> Result<i64, AttendanceError> {
    let millis = check_out.signed_duration_since(*check_in).num_milliseconds();
    if millis < 0 {
        return Err(AttendanceError::CheckOutBeforeCheckIn {
            check_in: *check_in,
            check_out: *check_out,
        });
    }
    Ok((millis + 30_000) / 60_000)
}

pub fn format_minutes(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Human-readable length of a visit, or [`STILL_CHECKED_IN`] for an open one.
pub fn compute_duration(
    check_in: &NaiveDateTime,
    check_out: Option<&NaiveDateTime>,
) -> Result<String, AttendanceError> {
    match check_out {
        None => Ok(STILL_CHECKED_IN.to_string()),
        Some(out) => elapsed_minutes(check_in, out).map(format_minutes),
    }
}
