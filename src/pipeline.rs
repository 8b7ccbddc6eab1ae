//! Pipeline orchestration
//!
//! `SleepTracker` is the public entry point: it holds the registered
//! analyses, establishes the sorted-input contract the analyses rely on,
//! and wraps their results in a report envelope with producer metadata.

use chrono::Utc;
use uuid::Uuid;

use crate::analysis::{default_analyses, SleepAnalysis};
use crate::parser::{self, LineError};
use crate::types::{ReportPeriod, ReportProducer, SleepReport, SleepSession};
use crate::{NOCTIS_VERSION, PRODUCER_NAME};

/// Runs a set of analyses over a sleep log and produces a [`SleepReport`].
pub struct SleepTracker {
    analyses: Vec<Box<dyn SleepAnalysis>>,
}

impl Default for SleepTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SleepTracker {
    /// Tracker with the seven built-in analyses registered in report order
    pub fn new() -> Self {
        Self {
            analyses: default_analyses(),
        }
    }

    /// Tracker with no analyses registered
    pub fn empty() -> Self {
        Self {
            analyses: Vec::new(),
        }
    }

    /// Registers an additional analysis after the existing ones
    pub fn add_analysis(&mut self, analysis: Box<dyn SleepAnalysis>) {
        self.analyses.push(analysis);
    }

    pub fn analyses(&self) -> &[Box<dyn SleepAnalysis>] {
        &self.analyses
    }

    /// Runs every registered analysis over an already-sorted session slice.
    pub fn run(&self, sessions: &[SleepSession]) -> SleepReport {
        let period = match (sessions.first(), sessions.last()) {
            (Some(first), Some(last)) => Some(ReportPeriod {
                first_date: first.sleep_start().date(),
                last_date: last.sleep_end().date(),
            }),
            _ => None,
        };

        SleepReport {
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: NOCTIS_VERSION.to_string(),
                instance_id: Uuid::new_v4().to_string(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            session_count: sessions.len(),
            period,
            results: self
                .analyses
                .iter()
                .map(|analysis| analysis.analyze(sessions))
                .collect(),
        }
    }

    /// Parses a log leniently, sorts the sessions by sleep start (the
    /// input contract of every analysis), and runs the registered set.
    /// Malformed lines are returned alongside the report, not dropped
    /// silently.
    pub fn analyze_log(&self, text: &str) -> (SleepReport, Vec<LineError>) {
        let mut outcome = parser::parse_log(text);
        outcome.sessions.sort_by_key(SleepSession::sleep_start);
        (self.run(&outcome.sessions), outcome.errors)
    }
}
