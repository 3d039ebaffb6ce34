//! Utility functions for the feed pipeline: URL validation, HTTP date
//! parsing, and calendar-struct conversions.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde_json::{json, Value};
use url;

/// Field order of the nine-part calendar struct, as emitted in output arrays.
pub const CALENDAR_KEYS: [&str; 9] = [
    "year", "month", "day", "hour", "minute", "second", "weekday", "yearday", "isdst",
];

/// Helper function to validate a URL
pub fn is_valid_url(url: &str) -> bool {
    if let Ok(parsed) = url::Url::parse(url) {
        parsed.scheme() == "http" || parsed.scheme() == "https"
    } else {
        false
    }
}

/// Parse an HTTP date header value in the formats servers actually send
pub fn parse_http_date(date_str: &str) -> Option<DateTime<Utc>> {
    // RFC 2822 is what Last-Modified and Date are supposed to carry
    if let Ok(date) = DateTime::parse_from_rfc2822(date_str) {
        return Some(date.with_timezone(&Utc));
    }

    // Some servers hand back RFC 3339 anyway
    if let Ok(date) = DateTime::parse_from_rfc3339(date_str) {
        return Some(date.with_timezone(&Utc));
    }

    None
}

/// Format a UTC timestamp as an HTTP date suitable for If-Modified-Since
pub fn http_date(dt: &DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Decompose a UTC timestamp into the nine-field calendar struct used inside
/// the parsed tree. Weekday is Monday-based (0-6), yearday 1-based, isdst 0.
pub fn calendar_value(dt: &DateTime<Utc>) -> Value {
    json!({
        "year": dt.year(),
        "month": dt.month(),
        "day": dt.day(),
        "hour": dt.hour(),
        "minute": dt.minute(),
        "second": dt.second(),
        "weekday": dt.weekday().num_days_from_monday(),
        "yearday": dt.ordinal(),
        "isdst": 0,
    })
}

/// Recognize a calendar-struct object and flatten it to its nine ordered
/// integers. Returns None unless the value is an object carrying exactly the
/// nine expected fields as integers.
pub fn calendar_parts(value: &Value) -> Option<Vec<i64>> {
    let map = value.as_object()?;
    if map.len() != 9 {
        return None;
    }
    CALENDAR_KEYS
        .iter()
        .map(|key| map.get(*key).and_then(Value::as_i64))
        .collect()
}

/// Rebuild a UTC timestamp from a persisted nine-integer sequence. The
/// derived weekday, yearday, and isdst fields are ignored.
pub fn datetime_from_parts(parts: &[i64]) -> Option<DateTime<Utc>> {
    if parts.len() != 9 {
        return None;
    }
    let year = i32::try_from(parts[0]).ok()?;
    let month = u32::try_from(parts[1]).ok()?;
    let day = u32::try_from(parts[2]).ok()?;
    let hour = u32::try_from(parts[3]).ok()?;
    let minute = u32::try_from(parts[4]).ok()?;
    let second = u32::try_from(parts[5]).ok()?;
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
}
