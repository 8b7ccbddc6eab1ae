//! Sleepless-night counting
//!
//! A sleepless night is a calendar night inside the observed span during
//! which no recorded session overlapped the night window. The span runs
//! from the night date of the first session's start to the night date of
//! the last session's end, both mapped through [`night::night_date`].

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::analysis::SleepAnalysis;
use crate::night;
use crate::types::{AnalysisResult, AnalysisValue, SleepSession};

/// Counts nights with no overlapping sleep in a sorted session sequence.
/// Returns `None` for an empty sequence: "no data" is not a zero.
pub fn count_sleepless_nights(sessions: &[SleepSession]) -> Option<u64> {
    let first = sessions.first()?;
    let last = sessions.last()?;

    let first_night = night::night_date(first.sleep_start());
    let last_night = night::night_date(last.sleep_end());
    let total_nights = night::count_nights_between(first_night, last_night);

    let nights_with_sleep: HashSet<NaiveDate> = sessions
        .iter()
        .filter(|s| night::overlaps_night_window(s.sleep_start(), s.sleep_end()))
        .map(|s| night::night_date(s.sleep_start()))
        .collect();

    Some(total_nights.saturating_sub(nights_with_sleep.len() as u64))
}

pub struct SleeplessNights;

impl SleepAnalysis for SleeplessNights {
    fn describe(&self) -> &'static str {
        "Sleepless nights"
    }

    fn analyze(&self, sessions: &[SleepSession]) -> AnalysisResult {
        let value = count_sleepless_nights(sessions)
            .map_or(AnalysisValue::NoData, AnalysisValue::Count);
        AnalysisResult::new(self.describe(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SleepQuality;
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;

    fn dt(d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    // Ends before 06:00 so the wake timestamp still buckets to the same
    // night as the start.
    fn night_session(start_day: u32) -> SleepSession {
        SleepSession::new(
            dt(start_day, 22, 0),
            dt(start_day + 1, 5, 30),
            SleepQuality::Normal,
        )
        .unwrap()
    }

    #[test]
    fn test_gap_nights_are_counted() {
        // Nights of Oct 1 and Oct 4 covered; Oct 2 and Oct 3 sleepless.
        let sessions = vec![night_session(1), night_session(4)];
        assert_eq!(count_sleepless_nights(&sessions), Some(2));
    }

    #[test]
    fn test_all_nights_covered() {
        let sessions = vec![
            night_session(1),
            night_session(2),
            night_session(3),
            night_session(4),
        ];
        assert_eq!(count_sleepless_nights(&sessions), Some(0));
    }

    #[test]
    fn test_multiple_sessions_on_one_night_count_once() {
        let sessions = vec![
            SleepSession::new(dt(1, 22, 0), dt(2, 1, 0), SleepQuality::Normal).unwrap(),
            SleepSession::new(dt(2, 2, 0), dt(2, 5, 0), SleepQuality::Normal).unwrap(),
            night_session(2),
        ];
        // Both Oct-1-night sessions dedupe to one night; Oct 2 covered too.
        assert_eq!(count_sleepless_nights(&sessions), Some(0));
    }

    #[test]
    fn test_wake_after_six_opens_the_next_night() {
        // Waking at 06:30 buckets the end to its own date, so the span
        // gains a trailing night that nothing covers.
        let sessions = vec![SleepSession::new(
            dt(1, 22, 0),
            dt(2, 6, 30),
            SleepQuality::Normal,
        )
        .unwrap()];
        assert_eq!(count_sleepless_nights(&sessions), Some(1));
    }

    #[test]
    fn test_single_daytime_session_is_one_sleepless_night() {
        let sessions = vec![SleepSession::new(
            dt(1, 14, 0),
            dt(1, 15, 0),
            SleepQuality::Good,
        )
        .unwrap()];
        assert_eq!(count_sleepless_nights(&sessions), Some(1));
    }

    #[test]
    fn test_empty_input_is_no_data() {
        assert_eq!(count_sleepless_nights(&[]), None);

        let result = SleeplessNights.analyze(&[]);
        assert_eq!(result.value, AnalysisValue::NoData);
    }

    #[test]
    fn test_analysis_wrapper_reports_count() {
        let result = SleeplessNights.analyze(&[night_session(1), night_session(3)]);
        assert_eq!(result.value, AnalysisValue::Count(1));
    }
}
