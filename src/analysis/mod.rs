//! Analysis functions over a sleep log
//!
//! Every analysis implements [`SleepAnalysis`]: one method from a sorted
//! session slice to an [`AnalysisResult`]. The set is open; consumers can
//! register their own implementations next to the built-ins.

pub mod aggregates;
pub mod chronotype;
pub mod sleepless;

use crate::types::{AnalysisResult, SleepSession};

pub use aggregates::{
    AverageDuration, BadQualitySessions, MaxDuration, MinDuration, TotalSessions,
};
pub use chronotype::{ChronotypeAnalysis, ChronotypeOutcome};
pub use sleepless::SleeplessNights;

/// One descriptive statistic computed over a session log.
///
/// Input contract: the slice is sorted ascending by sleep start and every
/// session satisfies `sleep_end >= sleep_start`. Implementations do not
/// re-validate either.
pub trait SleepAnalysis {
    /// Human-readable label used in reports
    fn describe(&self) -> &'static str;

    fn analyze(&self, sessions: &[SleepSession]) -> AnalysisResult;
}

/// The built-in analyses in report order
pub fn default_analyses() -> Vec<Box<dyn SleepAnalysis>> {
    vec![
        Box::new(TotalSessions),
        Box::new(MinDuration),
        Box::new(MaxDuration),
        Box::new(AverageDuration),
        Box::new(BadQualitySessions),
        Box::new(SleeplessNights),
        Box::new(ChronotypeAnalysis),
    ]
}
