//! Noctis CLI - Command-line interface for the sleep log analyzer
//!
//! Commands:
//! - report: analyze a sleep log and print the report
//! - validate: check every line of a log against the input format
//! - schema: print the input line format

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use noctis::parser::{parse_log, TIMESTAMP_FORMAT};
use noctis::pipeline::SleepTracker;
use noctis::types::SleepReport;
use noctis::NOCTIS_VERSION;

/// Noctis - Offline analysis engine for sleep session logs
#[derive(Parser)]
#[command(name = "noctis")]
#[command(version = NOCTIS_VERSION)]
#[command(about = "Analyze sleep session logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a sleep log and print the report
    Report {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Fail on the first malformed line instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Check every line of a log against the input format
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the input line format
    Schema,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON report payload
    Json,
    /// Pretty-printed JSON report payload
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), NoctisCliError> {
    match cli.command {
        Commands::Report {
            input,
            output,
            format,
            strict,
        } => cmd_report(&input, &output, format, strict),

        Commands::Validate { input, json } => cmd_validate(&input, json),

        Commands::Schema => cmd_schema(),
    }
}

fn read_input(input: &Path) -> Result<String, NoctisCliError> {
    if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            eprintln!("Reading log from terminal; end input with Ctrl-D");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn cmd_report(
    input: &Path,
    output: &Path,
    format: OutputFormat,
    strict: bool,
) -> Result<(), NoctisCliError> {
    let text = read_input(input)?;

    let tracker = SleepTracker::new();
    let (report, errors) = tracker.analyze_log(&text);

    if strict {
        if let Some(first) = errors.first() {
            return Err(NoctisCliError::MalformedLine {
                line_number: first.line_number,
                error: first.error.clone(),
            });
        }
    } else if !errors.is_empty() {
        eprintln!("Skipped {} malformed line(s)", errors.len());
    }

    if report.session_count == 0 {
        return Err(NoctisCliError::NoSessions);
    }

    let rendered = match format {
        OutputFormat::Text => render_text_report(&report),
        OutputFormat::Json => serde_json::to_string(&report)? + "\n",
        OutputFormat::JsonPretty => serde_json::to_string_pretty(&report)? + "\n",
    };

    if output.to_string_lossy() == "-" {
        print!("{}", rendered);
    } else {
        fs::write(output, rendered)?;
    }

    Ok(())
}

fn cmd_validate(input: &Path, json: bool) -> Result<(), NoctisCliError> {
    let text = read_input(input)?;
    let outcome = parse_log(&text);

    let report = ValidationReport {
        total_lines: outcome.sessions.len() + outcome.errors.len(),
        valid_lines: outcome.sessions.len(),
        invalid_lines: outcome.errors.len(),
        errors: outcome.errors,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total lines:   {}", report.total_lines);
        println!("Valid lines:   {}", report.valid_lines);
        println!("Invalid lines: {}", report.invalid_lines);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for err in &report.errors {
                println!("  - Line {}: {} ({})", err.line_number, err.error, err.line);
            }
        }
    }

    if report.invalid_lines > 0 {
        Err(NoctisCliError::ValidationFailed(report.invalid_lines))
    } else {
        Ok(())
    }
}

fn cmd_schema() -> Result<(), NoctisCliError> {
    println!("Input line format");
    println!();
    println!("One session per line, three fields separated by ';':");
    println!("  <sleep start>;<sleep end>;<quality>");
    println!();
    println!("Timestamps use the pattern {} (e.g. 01.10.25 22:15).", TIMESTAMP_FORMAT);
    println!("Quality is one of: GOOD, NORMAL, BAD.");
    println!("Sleep end must not precede sleep start; blank lines are ignored.");
    println!();
    println!("Example:");
    println!("  01.10.25 22:15;02.10.25 08:00;GOOD");

    Ok(())
}

fn render_text_report(report: &SleepReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    out.push_str(&rule);
    out.push_str("\nSLEEP LOG ANALYSIS\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Sessions analyzed: {}\n", report.session_count));
    if let Some(period) = &report.period {
        out.push_str(&format!(
            "Analysis period:   {} - {}\n",
            period.first_date, period.last_date
        ));
    }
    out.push('\n');
    out.push_str("RESULTS:\n");
    out.push_str(&"-".repeat(60));
    out.push('\n');
    for result in &report.results {
        out.push_str(&format!("* {}\n", result));
    }
    out.push_str(&rule);
    out.push('\n');

    out
}

// Error types

#[derive(Debug)]
enum NoctisCliError {
    Io(io::Error),
    Json(serde_json::Error),
    NoSessions,
    MalformedLine { line_number: usize, error: String },
    ValidationFailed(usize),
}

impl From<io::Error> for NoctisCliError {
    fn from(e: io::Error) -> Self {
        NoctisCliError::Io(e)
    }
}

impl From<serde_json::Error> for NoctisCliError {
    fn from(e: serde_json::Error) -> Self {
        NoctisCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<NoctisCliError> for CliError {
    fn from(e: NoctisCliError) -> Self {
        match e {
            NoctisCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            NoctisCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            NoctisCliError::NoSessions => CliError {
                code: "NO_SESSIONS".to_string(),
                message: "Input contains no valid sleep sessions".to_string(),
                hint: Some("Run 'noctis schema' to see the expected line format".to_string()),
            },
            NoctisCliError::MalformedLine { line_number, error } => CliError {
                code: "MALFORMED_LINE".to_string(),
                message: format!("Line {}: {}", line_number, error),
                hint: Some("Run 'noctis validate' for a full report".to_string()),
            },
            NoctisCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} line(s) failed validation", count),
                hint: Some("Fix the reported lines and retry".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_lines: usize,
    valid_lines: usize,
    invalid_lines: usize,
    errors: Vec<noctis::parser::LineError>,
}
