use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::AppError;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parses a timestamp from a request body. Accepts RFC 3339 and a few
/// common naive forms, which are taken as UTC.
pub fn parse_utc(input: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(AppError::Validation(format!(
        "Invalid date '{input}': expected an RFC 3339 timestamp"
    )))
}

/// Parses a calendar date (`YYYY-MM-DD`) from a request body or path.
pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid date '{input}': expected YYYY-MM-DD")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Timelike;

    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_utc("2026-08-31T09:00:00+02:00").unwrap();
        assert_eq!(parsed.hour(), 7);
    }

    #[test]
    fn parses_naive_forms_as_utc() {
        assert_eq!(
            parse_utc("2026-08-31T07:00:00").unwrap(),
            parse_utc("2026-08-31 07:00").unwrap()
        );
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert_matches!(parse_utc("next tuesday"), Err(AppError::Validation(_)));
        assert_matches!(parse_utc(""), Err(AppError::Validation(_)));
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_matches!(parse_date("31/08/2026"), Err(AppError::Validation(_)));
    }
}
