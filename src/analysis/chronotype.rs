//! Chronotype classification
//!
//! Only night-relevant sessions (those overlapping the night window)
//! count as evidence; daytime naps are ignored. Each survivor is bucketed
//! by its sleep and wake times, and the dominant bucket wins. Ties and
//! empty evidence both resolve to a neutral outcome, but an empty filter
//! result is reported as a distinct insufficient-data marker.

use crate::analysis::SleepAnalysis;
use crate::night::{self, minute_of_day, MINUTES_PER_DAY};
use crate::types::{AnalysisResult, AnalysisValue, Chronotype, SleepSession};

/// Sleeping at or after 23:00 qualifies for night owl
const OWL_SLEEP_FROM_MINUTE: u32 = 23 * 60;
/// Waking at or after 09:00 qualifies for night owl
const OWL_WAKE_FROM_MINUTE: u32 = 9 * 60;
/// Sleeping strictly before 22:00 qualifies for early bird
const BIRD_SLEEP_BEFORE_MINUTE: u32 = 22 * 60;
/// Waking strictly before 07:00 qualifies for early bird
const BIRD_WAKE_BEFORE_MINUTE: u32 = 7 * 60;

/// Classification outcome, keeping "not enough evidence" distinct from a
/// genuine intermediate result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChronotypeOutcome {
    Classified(Chronotype),
    InsufficientData,
}

/// Buckets a single session by its sleep and wake times.
///
/// When the session crosses midnight the wake minute is advanced by 24
/// hours and compared against the owl wake threshold advanced the same
/// way. The `>=`/`<` asymmetry between the owl and bird branches is
/// intentional; boundary minutes belong to the branch as written.
pub fn classify_session(session: &SleepSession) -> Chronotype {
    let sleep_minute = minute_of_day(session.sleep_start().time());
    let wake_minute = minute_of_day(session.sleep_end().time());

    let crosses_midnight = session.sleep_end().date() > session.sleep_start().date();
    let day_shift = if crosses_midnight { MINUTES_PER_DAY } else { 0 };
    let adjusted_wake = wake_minute + day_shift;

    let is_owl = sleep_minute >= OWL_SLEEP_FROM_MINUTE
        && adjusted_wake >= OWL_WAKE_FROM_MINUTE + day_shift;
    let is_bird =
        sleep_minute < BIRD_SLEEP_BEFORE_MINUTE && wake_minute < BIRD_WAKE_BEFORE_MINUTE;

    if is_owl {
        Chronotype::NightOwl
    } else if is_bird {
        Chronotype::EarlyBird
    } else {
        Chronotype::Intermediate
    }
}

/// Resolves the dominant chronotype over the night-relevant sessions.
pub fn dominant_chronotype(sessions: &[SleepSession]) -> ChronotypeOutcome {
    // Tallies indexed as [early bird, night owl, intermediate]
    let mut tallies = [0u64; 3];
    for session in sessions
        .iter()
        .filter(|s| night::overlaps_night_window(s.sleep_start(), s.sleep_end()))
    {
        let slot = match classify_session(session) {
            Chronotype::EarlyBird => 0,
            Chronotype::NightOwl => 1,
            Chronotype::Intermediate => 2,
        };
        tallies[slot] += 1;
    }

    let max = match tallies.iter().max() {
        Some(&m) if m > 0 => m,
        _ => return ChronotypeOutcome::InsufficientData,
    };

    if tallies.iter().filter(|&&t| t == max).count() > 1 {
        // Ambiguous evidence defaults to neutral, never an arbitrary
        // tied bucket.
        return ChronotypeOutcome::Classified(Chronotype::Intermediate);
    }

    let dominant = match tallies.iter().position(|&t| t == max) {
        Some(0) => Chronotype::EarlyBird,
        Some(1) => Chronotype::NightOwl,
        _ => Chronotype::Intermediate,
    };
    ChronotypeOutcome::Classified(dominant)
}

pub struct ChronotypeAnalysis;

impl SleepAnalysis for ChronotypeAnalysis {
    fn describe(&self) -> &'static str {
        "Dominant chronotype"
    }

    fn analyze(&self, sessions: &[SleepSession]) -> AnalysisResult {
        let value = match dominant_chronotype(sessions) {
            ChronotypeOutcome::Classified(chronotype) => AnalysisValue::Chronotype(chronotype),
            ChronotypeOutcome::InsufficientData => AnalysisValue::NoData,
        };
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

    fn session(start: NaiveDateTime, end: NaiveDateTime) -> SleepSession {
        SleepSession::new(start, end, SleepQuality::Normal).unwrap()
    }

    #[test]
    fn test_classify_night_owl() {
        assert_eq!(
            classify_session(&session(dt(1, 23, 30), dt(2, 9, 30))),
            Chronotype::NightOwl
        );
    }

    #[test]
    fn test_classify_early_bird() {
        assert_eq!(
            classify_session(&session(dt(1, 21, 0), dt(2, 6, 30))),
            Chronotype::EarlyBird
        );
    }

    #[test]
    fn test_classify_intermediate() {
        assert_eq!(
            classify_session(&session(dt(1, 22, 30), dt(2, 7, 30))),
            Chronotype::Intermediate
        );
    }

    #[test]
    fn test_owl_boundaries() {
        // 23:00 sharp qualifies; waking exactly 09:00 next day qualifies
        assert_eq!(
            classify_session(&session(dt(1, 23, 0), dt(2, 9, 0))),
            Chronotype::NightOwl
        );
        // Waking 08:59 next day misses the owl wake threshold
        assert_eq!(
            classify_session(&session(dt(1, 23, 0), dt(2, 8, 59))),
            Chronotype::Intermediate
        );
    }

    #[test]
    fn test_bird_boundaries() {
        // 22:00 sharp is not early bird
        assert_eq!(
            classify_session(&session(dt(1, 22, 0), dt(2, 6, 30))),
            Chronotype::Intermediate
        );
        // Waking exactly 07:00 is not early bird
        assert_eq!(
            classify_session(&session(dt(1, 21, 0), dt(2, 7, 0))),
            Chronotype::Intermediate
        );
    }

    #[test]
    fn test_same_day_owl_wake_is_not_advanced() {
        // Sleep 23:00, wake 23:50 the same day: wake minute 23*60 >= 09:00
        assert_eq!(
            classify_session(&session(dt(1, 23, 0), dt(1, 23, 50))),
            Chronotype::NightOwl
        );
    }

    #[test]
    fn test_dominant_chronotype_mode() {
        let sessions = vec![
            session(dt(1, 23, 30), dt(2, 9, 30)),
            session(dt(2, 23, 45), dt(3, 10, 0)),
            session(dt(3, 21, 0), dt(4, 6, 30)),
        ];
        assert_eq!(
            dominant_chronotype(&sessions),
            ChronotypeOutcome::Classified(Chronotype::NightOwl)
        );
    }

    #[test]
    fn test_tie_defaults_to_intermediate() {
        let sessions = vec![
            session(dt(1, 23, 30), dt(2, 9, 30)), // owl
            session(dt(2, 21, 0), dt(3, 6, 30)),  // bird
        ];
        assert_eq!(
            dominant_chronotype(&sessions),
            ChronotypeOutcome::Classified(Chronotype::Intermediate)
        );
    }

    #[test]
    fn test_daytime_naps_are_not_evidence() {
        let sessions = vec![
            session(dt(1, 14, 0), dt(1, 15, 0)), // nap, filtered out
            session(dt(1, 21, 0), dt(2, 6, 30)), // bird
        ];
        assert_eq!(
            dominant_chronotype(&sessions),
            ChronotypeOutcome::Classified(Chronotype::EarlyBird)
        );
    }

    #[test]
    fn test_empty_and_filtered_empty_are_insufficient_data() {
        assert_eq!(dominant_chronotype(&[]), ChronotypeOutcome::InsufficientData);

        let naps = vec![session(dt(1, 13, 0), dt(1, 14, 0))];
        assert_eq!(
            dominant_chronotype(&naps),
            ChronotypeOutcome::InsufficientData
        );

        let result = ChronotypeAnalysis.analyze(&naps);
        assert_eq!(result.value, AnalysisValue::NoData);
    }
}
