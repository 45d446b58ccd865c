//! Date/time helpers for shelf.
//!
//! Timestamps are stored as SQLite text (`datetime('now')`, UTC) and
//! rendered as RFC3339 at the API boundary.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Convert a SQLite datetime string (YYYY-MM-DD HH:MM:SS, UTC) to an
/// RFC3339 string (e.g., "2024-01-15T10:30:00Z").
pub fn to_rfc3339(datetime_str: &str) -> String {
    format!("{}Z", datetime_str.replace(' ', "T"))
}

/// Parse a stored datetime string into a `DateTime<Utc>`.
///
/// Accepts RFC3339 as well as the SQLite text format. Returns the
/// current time if parsing fails.
pub fn parse_stored(datetime_str: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.with_timezone(&Utc);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d %H:%M:%S") {
        return naive.and_utc();
    }

    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_to_rfc3339() {
        assert_eq!(to_rfc3339("2024-01-15 10:30:00"), "2024-01-15T10:30:00Z");
        assert_eq!(to_rfc3339("2024-12-31 23:59:59"), "2024-12-31T23:59:59Z");
    }

    #[test]
    fn test_parse_stored_sqlite_format() {
        let dt = parse_stored("2024-01-15 10:30:00");
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_stored_rfc3339() {
        let dt = parse_stored("2024-01-15T10:30:00Z");
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_stored_roundtrip() {
        let stored = "2024-01-15 10:30:00";
        let parsed = parse_stored(&to_rfc3339(stored));
        assert_eq!(parsed, parse_stored(stored));
    }
}
