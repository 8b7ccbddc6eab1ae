//! Sleep log line parsing
//!
//! One session per line, semicolon-delimited:
//! `dd.MM.yy HH:mm;dd.MM.yy HH:mm;QUALITY`, for example
//! `01.10.25 22:15;02.10.25 08:00;GOOD`.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::AnalysisError;
use crate::types::{SleepQuality, SleepSession};

/// chrono pattern for the log's timestamp fields
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%y %H:%M";

/// A line the lenient scan could not turn into a session
#[derive(Debug, Serialize)]
pub struct LineError {
    /// 1-based line number in the scanned text
    pub line_number: usize,
    pub line: String,
    pub error: String,
}

/// Result of a lenient whole-log scan
#[derive(Debug, Default)]
pub struct LogParseOutcome {
    pub sessions: Vec<SleepSession>,
    pub errors: Vec<LineError>,
}

fn parse_timestamp(field: &str) -> Result<NaiveDateTime, AnalysisError> {
    NaiveDateTime::parse_from_str(field.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| AnalysisError::DateParseError(format!("{}: {}", field.trim(), e)))
}

/// Parses a single log line into a session.
///
/// Rejects blank lines, a field count other than three, unparsable
/// timestamps, unknown quality tokens, and intervals ending before they
/// start (the construction failure propagates unchanged).
pub fn parse_line(line: &str) -> Result<SleepSession, AnalysisError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::ParseError("empty line".to_string()));
    }

    let parts: Vec<&str> = trimmed.split(';').collect();
    if parts.len() != 3 {
        return Err(AnalysisError::ParseError(format!(
            "expected 3 fields separated by ';', got {}",
            parts.len()
        )));
    }

    let sleep_start = parse_timestamp(parts[0])?;
    let sleep_end = parse_timestamp(parts[1])?;
    let quality: SleepQuality = parts[2].trim().parse()?;

    SleepSession::new(sleep_start, sleep_end, quality)
}

/// Scans a whole log leniently: blank lines are skipped, malformed lines
/// are collected with their 1-based line numbers, valid lines become
/// sessions in input order.
pub fn parse_log(text: &str) -> LogParseOutcome {
    let mut outcome = LogParseOutcome::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(session) => outcome.sessions.push(session),
            Err(error) => outcome.errors.push(LineError {
                line_number: index + 1,
                line: line.to_string(),
                error: error.to_string(),
            }),
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_valid_line() {
        let session = parse_line("01.10.25 22:15;02.10.25 08:00;GOOD").unwrap();

        assert_eq!(
            session.sleep_start(),
            NaiveDate::from_ymd_opt(2025, 10, 1)
                .unwrap()
                .and_hms_opt(22, 15, 0)
                .unwrap()
        );
        assert_eq!(
            session.sleep_end(),
            NaiveDate::from_ymd_opt(2025, 10, 2)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
        );
        assert_eq!(session.quality(), SleepQuality::Good);
    }

    #[test]
    fn test_parse_tolerates_field_whitespace() {
        let session = parse_line(" 01.10.25 22:15 ; 02.10.25 08:00 ; BAD ").unwrap();
        assert_eq!(session.quality(), SleepQuality::Bad);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert!(matches!(
            parse_line("01.10.25 22:15;02.10.25 08:00"),
            Err(AnalysisError::ParseError(_))
        ));
        assert!(matches!(
            parse_line("a;b;c;d"),
            Err(AnalysisError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_timestamp() {
        assert!(matches!(
            parse_line("2025-10-01 22:15;02.10.25 08:00;GOOD"),
            Err(AnalysisError::DateParseError(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_quality() {
        assert!(matches!(
            parse_line("01.10.25 22:15;02.10.25 08:00;GREAT"),
            Err(AnalysisError::UnknownQuality(_))
        ));
    }

    #[test]
    fn test_parse_rejects_inverted_interval() {
        assert!(matches!(
            parse_line("02.10.25 08:00;01.10.25 22:15;GOOD"),
            Err(AnalysisError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_parse_log_skips_blanks_and_collects_errors() {
        let text = "01.10.25 22:15;02.10.25 08:00;GOOD\n\
                    \n\
                    not a session\n\
                    02.10.25 23:00;03.10.25 07:00;BAD\n";

        let outcome = parse_log(text);

        assert_eq!(outcome.sessions.len(), 2);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].line_number, 3);
        assert_eq!(outcome.errors[0].line, "not a session");
    }
}
