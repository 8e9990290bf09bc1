use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Offset-less layouts, read as UTC. `%.f` also matches a missing fraction.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only layouts, read as midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%b %d, %Y"];

/// ISO date-time with a colon-less numeric offset such as `+0000`.
const OFFSET_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parses an entry timestamp.
///
/// Accepts RFC 3339 and RFC 2822 timestamps, ISO date-times with a `+hhmm`
/// offset, local date-times (taken as UTC) and bare dates such as
/// `2023-01-08`, `2023/01/08` or `Jan 8, 2023` (midnight UTC). Returns `None`
/// for anything else.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = DateTime::parse_from_str(raw, OFFSET_DATETIME_FORMAT) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Number of days between two instants, rounded up to the next whole day.
pub(crate) fn day_span(earliest: DateTime<Utc>, latest: DateTime<Utc>) -> u64 {
    let millis = (latest - earliest).num_milliseconds().max(0) as u64;
    millis.div_ceil(MILLIS_PER_DAY)
}
