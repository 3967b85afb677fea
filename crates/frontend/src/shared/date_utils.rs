//! Utilities for date and time formatting
//!
//! Backend timestamps arrive as RFC 3339 strings, naive date-times or epoch
//! milliseconds depending on the serializer. All of them render with the
//! configured `chrono` format string; anything else renders unchanged.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a timestamp string. Returns `None` when it is not a recognised date.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Epoch milliseconds as a UTC date-time.
pub fn from_epoch_millis(millis: i64) -> Option<NaiveDateTime> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.naive_utc())
}

/// True when every specifier of `fmt` is known to chrono.
pub fn is_valid_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Format a JSON date value with `fmt`. A value `fmt` cannot render is shown
/// as received.
/// Example: "2024-03-15T14:02:26Z" with "%d/%m/%Y %H:%M" -> "15/03/2024 14:02"
pub fn format_date_value(value: &Value, fmt: &str) -> String {
    let parsed = match value {
        Value::String(s) => parse_datetime(s),
        Value::Number(n) => n.as_i64().and_then(from_epoch_millis),
        _ => None,
    };
    if let Some(dt) = parsed {
        let mut out = String::new();
        if write!(out, "{}", dt.format(fmt)).is_ok() {
            return out;
        }
        log::warn!("cannot format date with {fmt:?}");
    }
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FMT: &str = "%d/%m/%Y %H:%M";

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(
            format_date_value(&json!("2024-03-15T14:02:26.123Z"), FMT),
            "15/03/2024 14:02"
        );
    }

    #[test]
    fn test_format_naive() {
        assert_eq!(
            format_date_value(&json!("2024-12-31T23:59:59"), FMT),
            "31/12/2024 23:59"
        );
        assert_eq!(format_date_value(&json!("2024-03-15"), FMT), "15/03/2024 00:00");
    }

    #[test]
    fn test_format_epoch_millis() {
        assert_eq!(format_date_value(&json!(0), FMT), "01/01/1970 00:00");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date_value(&json!("invalid"), FMT), "invalid");
        assert_eq!(format_date_value(&json!(true), FMT), "true");
    }

    #[test]
    fn test_bad_format_keeps_raw_value() {
        assert!(is_valid_format(FMT));
        assert!(!is_valid_format("%d/%m/%Y %Q"));
        assert_eq!(
            format_date_value(&json!("2024-03-15T14:02:26Z"), "%d/%m/%Y %Q"),
            "2024-03-15T14:02:26Z"
        );
        assert_eq!(format_date_value(&json!(0), "%Q"), "0");
    }
}
