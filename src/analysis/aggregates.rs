//! Plain one-pass reductions: session count, duration extremes and
//! average, bad-quality count. Empty input yields `NoData` rather than a
//! zero that could be mistaken for a measurement.

use crate::analysis::SleepAnalysis;
use crate::types::{AnalysisResult, AnalysisValue, SleepQuality, SleepSession};

pub struct TotalSessions;

impl SleepAnalysis for TotalSessions {
    fn describe(&self) -> &'static str {
        "Total sleep sessions"
    }

    fn analyze(&self, sessions: &[SleepSession]) -> AnalysisResult {
        let value = if sessions.is_empty() {
            AnalysisValue::NoData
        } else {
            AnalysisValue::Count(sessions.len() as u64)
        };
        AnalysisResult::new(self.describe(), value)
    }
}

pub struct MinDuration;

impl SleepAnalysis for MinDuration {
    fn describe(&self) -> &'static str {
        "Shortest session (minutes)"
    }

    fn analyze(&self, sessions: &[SleepSession]) -> AnalysisResult {
        let value = sessions
            .iter()
            .map(SleepSession::duration_minutes)
            .min()
            .map_or(AnalysisValue::NoData, AnalysisValue::Minutes);
        AnalysisResult::new(self.describe(), value)
    }
}

pub struct MaxDuration;

impl SleepAnalysis for MaxDuration {
    fn describe(&self) -> &'static str {
        "Longest session (minutes)"
    }

    fn analyze(&self, sessions: &[SleepSession]) -> AnalysisResult {
        let value = sessions
            .iter()
            .map(SleepSession::duration_minutes)
            .max()
            .map_or(AnalysisValue::NoData, AnalysisValue::Minutes);
        AnalysisResult::new(self.describe(), value)
    }
}

pub struct AverageDuration;

impl SleepAnalysis for AverageDuration {
    fn describe(&self) -> &'static str {
        "Average session duration (minutes)"
    }

    fn analyze(&self, sessions: &[SleepSession]) -> AnalysisResult {
        let value = if sessions.is_empty() {
            AnalysisValue::NoData
        } else {
            let total: i64 = sessions.iter().map(SleepSession::duration_minutes).sum();
            AnalysisValue::AverageMinutes(total as f64 / sessions.len() as f64)
        };
        AnalysisResult::new(self.describe(), value)
    }
}

pub struct BadQualitySessions;

impl SleepAnalysis for BadQualitySessions {
    fn describe(&self) -> &'static str {
        "Bad-quality sessions"
    }

    fn analyze(&self, sessions: &[SleepSession]) -> AnalysisResult {
        let value = if sessions.is_empty() {
            AnalysisValue::NoData
        } else {
            let bad = sessions
                .iter()
                .filter(|s| s.quality() == SleepQuality::Bad)
                .count();
            AnalysisValue::Count(bad as u64)
        };
        AnalysisResult::new(self.describe(), value)
    }
}
