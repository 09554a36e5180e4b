//! Date and time normalization for IGC headers and fixes
//!
//! Dates arrive as `DDMMYY` and always land in the 2000s. Fix times arrive as
//! `HHMMSS`. Elapsed time is rendered as `H:MM:SS`.

use chrono::{Duration, NaiveDate, NaiveTime};

/// Flight window resolved from the first and last fix timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightWindow {
    pub start: NaiveTime,
    pub elapsed: Duration,
}

impl FlightWindow {
    /// Start time as `HH:MM:SS`
    pub fn start_time(&self) -> String {
        self.start.format("%H:%M:%S").to_string()
    }

    pub fn duration(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

/// Split a string of exactly six ASCII digits into three two-digit numbers
fn split_six_digits(value: &str) -> Option<(u32, u32, u32)> {
    let bytes = value.as_bytes();
    if bytes.len() != 6 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let pair = |i: usize| u32::from(bytes[i] - b'0') * 10 + u32::from(bytes[i + 1] - b'0');
    Some((pair(0), pair(2), pair(4)))
}

/// Parse a `DDMMYY` date, assuming the 2000s for the two-digit year
pub fn parse_ddmmyy(value: &str) -> Option<NaiveDate> {
    let (day, month, year) = split_six_digits(value)?;
    NaiveDate::from_ymd_opt(2000 + year as i32, month, day)
}

/// Normalize a `DDMMYY` header date to `YYYY-MM-DD`, or empty if malformed
pub fn normalize_date(value: &str) -> String {
    parse_ddmmyy(value)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse an `HHMMSS` fix timestamp as a time of day
pub fn parse_hhmmss(value: &str) -> Option<NaiveTime> {
    let (hour, minute, second) = split_six_digits(value)?;
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Resolve the flight window from the first and last fix timestamps.
///
/// Returns `None` if either timestamp is missing or does not parse. The
/// elapsed time is a plain time-of-day difference: a flight that crosses
/// midnight yields a negative duration, which is not wrapped to 24h.
pub fn resolve_flight_window(first: Option<&str>, last: Option<&str>) -> Option<FlightWindow> {
    let start = parse_hhmmss(first?)?;
    let end = parse_hhmmss(last?)?;
    Some(FlightWindow {
        start,
        elapsed: end.signed_duration_since(start),
    })
}

/// Format an elapsed time as `H:MM:SS`.
///
/// Negative values are expressed as a whole negative day plus a positive
/// remainder, e.g. `-1 day, 23:00:00` for one hour backwards.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.num_seconds();
    let days = total.div_euclid(86_400);
    let rem = total.rem_euclid(86_400);
    let hms = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);

    match days {
        0 => hms,
        1 | -1 => format!("{} day, {}", days, hms),
        _ => format!("{} days, {}", days, hms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_date_assumes_2000s() {
        assert_eq!(normalize_date("010125"), "2025-01-01");
        assert_eq!(normalize_date("311299"), "2099-12-31");
        assert_eq!(normalize_date("150770"), "2070-07-15");
        assert_eq!(normalize_date("290200"), "2000-02-29");
    }

    #[test]
    fn test_normalize_date_rejects_malformed() {
        assert_eq!(normalize_date("garbage"), "");
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("01012025"), "");
        assert_eq!(normalize_date("0101"), "");
        assert_eq!(normalize_date("320125"), "");
        assert_eq!(normalize_date("011325"), "");
        assert_eq!(normalize_date("290223"), "");
        assert_eq!(normalize_date("01 125"), "");
    }

    #[test]
    fn test_parse_hhmmss() {
        assert_eq!(parse_hhmmss("083000"), NaiveTime::from_hms_opt(8, 30, 0));
        assert_eq!(parse_hhmmss("235959"), NaiveTime::from_hms_opt(23, 59, 59));
        assert_eq!(parse_hhmmss("240000"), None);
        assert_eq!(parse_hhmmss("086000"), None);
        assert_eq!(parse_hhmmss("0830"), None);
        assert_eq!(parse_hhmmss("08h30m"), None);
    }

    #[test]
    fn test_resolve_flight_window() {
        let window = resolve_flight_window(Some("083000"), Some("094515")).unwrap();
        assert_eq!(window.start_time(), "08:30:00");
        assert_eq!(window.duration(), "1:15:15");
    }

    #[test]
    fn test_resolve_flight_window_single_fix() {
        let window = resolve_flight_window(Some("120000"), Some("120000")).unwrap();
        assert_eq!(window.start_time(), "12:00:00");
        assert_eq!(window.duration(), "0:00:00");
    }

    #[test]
    fn test_resolve_flight_window_requires_both_ends() {
        assert!(resolve_flight_window(None, None).is_none());
        assert!(resolve_flight_window(Some("083000"), None).is_none());
        assert!(resolve_flight_window(Some("083000"), Some("9x4515")).is_none());
        assert!(resolve_flight_window(Some("xx3000"), Some("094515")).is_none());
    }

    #[test]
    fn test_midnight_crossing_is_not_wrapped() {
        let window = resolve_flight_window(Some("233000"), Some("003000")).unwrap();
        assert_eq!(window.elapsed, Duration::hours(-23));
        assert_eq!(window.duration(), "-1 day, 1:00:00");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::seconds(0)), "0:00:00");
        assert_eq!(format_elapsed(Duration::seconds(59)), "0:00:59");
        assert_eq!(format_elapsed(Duration::seconds(4515)), "1:15:15");
        assert_eq!(format_elapsed(Duration::seconds(86_399)), "23:59:59");
        assert_eq!(format_elapsed(Duration::seconds(-3600)), "-1 day, 23:00:00");
    }
}
