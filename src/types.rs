//! Core types for the Noctis analysis pipeline
//!
//! This module defines the data that flows through an analysis run: the
//! immutable sleep session record, the quality and chronotype enums, and
//! the result/report envelope produced by the analyses.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;

/// Quality label attached to a session in the input log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Good,
    Normal,
    Bad,
}

impl SleepQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            SleepQuality::Good => "good",
            SleepQuality::Normal => "normal",
            SleepQuality::Bad => "bad",
        }
    }
}

impl FromStr for SleepQuality {
    type Err = AnalysisError;

    /// Parses the log tokens `GOOD`, `NORMAL`, `BAD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GOOD" => Ok(SleepQuality::Good),
            "NORMAL" => Ok(SleepQuality::Normal),
            "BAD" => Ok(SleepQuality::Bad),
            other => Err(AnalysisError::UnknownQuality(other.to_string())),
        }
    }
}

/// Habitual sleep/wake timing classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chronotype {
    EarlyBird,
    NightOwl,
    Intermediate,
}

impl Chronotype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chronotype::EarlyBird => "early bird",
            Chronotype::NightOwl => "night owl",
            Chronotype::Intermediate => "intermediate",
        }
    }
}

impl fmt::Display for Chronotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded sleep interval with a quality label.
///
/// Immutable once constructed; `new` rejects intervals whose end precedes
/// their start, so downstream logic never sees an invalid record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepSession {
    sleep_start: NaiveDateTime,
    sleep_end: NaiveDateTime,
    quality: SleepQuality,
}

impl SleepSession {
    pub fn new(
        sleep_start: NaiveDateTime,
        sleep_end: NaiveDateTime,
        quality: SleepQuality,
    ) -> Result<Self, AnalysisError> {
        if sleep_end < sleep_start {
            return Err(AnalysisError::InvalidInterval {
                start: sleep_start,
                end: sleep_end,
            });
        }
        Ok(Self {
            sleep_start,
            sleep_end,
            quality,
        })
    }

    pub fn sleep_start(&self) -> NaiveDateTime {
        self.sleep_start
    }

    pub fn sleep_end(&self) -> NaiveDateTime {
        self.sleep_end
    }

    pub fn quality(&self) -> SleepQuality {
        self.quality
    }

    /// Session length in whole minutes, truncated
    pub fn duration_minutes(&self) -> i64 {
        (self.sleep_end - self.sleep_start).num_minutes()
    }
}

/// Typed result value produced by one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnalysisValue {
    Count(u64),
    Minutes(i64),
    AverageMinutes(f64),
    Chronotype(Chronotype),
    /// Empty or filtered-empty input; distinct from any genuine zero
    /// or genuine Intermediate classification.
    NoData,
}

impl fmt::Display for AnalysisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisValue::Count(n) => write!(f, "{}", n),
            AnalysisValue::Minutes(m) => write!(f, "{}", m),
            AnalysisValue::AverageMinutes(m) => write!(f, "{:.1}", m),
            AnalysisValue::Chronotype(c) => write!(f, "{}", c),
            AnalysisValue::NoData => f.write_str("no data"),
        }
    }
}

/// Description plus value, as emitted by a [`SleepAnalysis`](crate::analysis::SleepAnalysis)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub description: String,
    pub value: AnalysisValue,
}

impl AnalysisResult {
    pub fn new(description: impl Into<String>, value: AnalysisValue) -> Self {
        Self {
            description: description.into(),
            value,
        }
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.value)
    }
}

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// First and last calendar date covered by the analyzed log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

/// Complete output of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepReport {
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    pub session_count: usize,
    pub period: Option<ReportPeriod>,
    pub results: Vec<AnalysisResult>,
}
