//! Millisecond timestamps
//!
//! Records carry integer milliseconds since the Unix epoch, both for the
//! store-stamped `createdAt` and for an expense's occurrence `date`.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, Utc};

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse a date argument: either `YYYY-MM-DD` (UTC midnight) or raw epoch milliseconds
pub fn parse_date_millis(s: &str) -> Result<i64, String> {
    let s = s.trim();

    if let Ok(ms) = s.parse::<i64>() {
        return Ok(ms);
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}': expected YYYY-MM-DD or epoch milliseconds", s))?;

    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .ok_or_else(|| format!("Invalid date '{}'", s))
}

/// Format epoch milliseconds with a strftime pattern
///
/// Falls back to the raw number when the value is out of range or the
/// pattern is not a valid strftime pattern.
pub fn format_millis(ms: i64, format: &str) -> String {
    let Some(dt) = DateTime::<Utc>::from_timestamp_millis(ms) else {
        return ms.to_string();
    };

    let mut out = String::new();
    match write!(out, "{}", dt.format(format)) {
        Ok(()) => out,
        Err(_) => ms.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_date_millis("2023-11-14").unwrap(), 1_699_920_000_000);
    }

    #[test]
    fn test_parse_raw_millis() {
        assert_eq!(parse_date_millis("1700000000000").unwrap(), 1_700_000_000_000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date_millis("yesterday").is_err());
        assert!(parse_date_millis("2023-13-01").is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(format_millis(1_700_000_000_000, "%Y-%m-%d"), "2023-11-14");
    }

    #[test]
    fn test_format_with_bad_pattern_falls_back() {
        assert_eq!(format_millis(0, "%Q"), "0");
    }

    #[test]
    fn test_now_is_after_fixed_point() {
        assert!(now_millis() > 1_700_000_000_000);
    }
}
