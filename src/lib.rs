//! Noctis - Offline analysis engine for sleep session logs
//!
//! Noctis turns a chronologically ordered log of sleep sessions (start,
//! end, quality label) into descriptive statistics through a deterministic
//! pipeline: line parsing → session validation → analysis set → report.
//!
//! ## Modules
//!
//! - **night**: night-window calculus (overlap, bucketing, night counting)
//! - **analysis**: the analysis functions, from plain reductions to the
//!   sleepless-night counter and chronotype classifier
//! - **parser**: the semicolon-delimited log line format
//! - **pipeline**: orchestration and the report envelope

pub mod analysis;
pub mod error;
pub mod night;
pub mod parser;
pub mod pipeline;
pub mod types;

pub use analysis::{ChronotypeOutcome, SleepAnalysis};
pub use error::AnalysisError;
pub use parser::{parse_line, parse_log};
pub use pipeline::SleepTracker;
pub use types::{
    AnalysisResult, AnalysisValue, Chronotype, SleepQuality, SleepReport, SleepSession,
};

/// Noctis version embedded in all report payloads
pub const NOCTIS_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "noctis";
