//! Calendar helpers used to normalize report boundaries.
//! All functions are pure and work on naive (timezone-less) timestamps.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub fn start_of_day(ts: NaiveDateTime) -> NaiveDateTime {
    ts.date().and_time(NaiveTime::MIN)
}

const LAST_MICRO_OF_DAY: NaiveTime = match NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999) {
    Some(t) => t,
    None => panic!("23:59:59.999999 is a valid time"),
};

/// Last instant of the day, at microsecond precision.
pub fn end_of_day(ts: NaiveDateTime) -> NaiveDateTime {
    ts.date().and_time(LAST_MICRO_OF_DAY)
}

pub fn start_of_hour(ts: NaiveDateTime) -> NaiveDateTime {
    start_of_day(ts) + Duration::hours(i64::from(ts.hour()))
}

/// hh:59:59, sub-second part dropped.
pub fn end_of_hour(ts: NaiveDateTime) -> NaiveDateTime {
    start_of_hour(ts) + Duration::minutes(59) + Duration::seconds(59)
}

/// Whole days between two instants, regardless of their order.
pub fn diff_in_days(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (b - a).num_days().abs()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` or a bare date (midnight).
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| parse_date(s).map(|d| d.and_time(NaiveTime::MIN)))
}
