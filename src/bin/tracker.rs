//! Tracker CLI - prints summaries for the built-in sample sensor packages
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).

use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use workout_tracker::{TrackerError, WorkoutProcessor, SAMPLE_PACKAGES, TRACKER_VERSION};

/// Tracker - derived fitness metrics from raw workout sensor readings
#[derive(Parser)]
#[command(name = "tracker")]
#[command(version = TRACKER_VERSION)]
#[command(about = "Summarize the built-in sample workouts", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, default_value = "text")]
    output_format: OutputFormat,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One summary line per workout
    Text,
    /// JSON array of summaries
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

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

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), TrackerCliError> {
    let mut processor = WorkoutProcessor::new();
    processor.process_all(SAMPLE_PACKAGES)?;
    tracing::info!(count = processor.summaries().len(), "processed sample packages");

    let output = match cli.output_format {
        OutputFormat::Text => {
            let mut lines = processor.messages().join("\n");
            lines.push('\n');
            lines
        }
        OutputFormat::Json => processor.to_json(false)? + "\n",
        OutputFormat::JsonPretty => processor.to_json(true)? + "\n",
    };

    let mut stdout = io::stdout();
    write!(stdout, "{}", output)?;
    stdout.flush()?;

    Ok(())
}

#[derive(Debug)]
enum TrackerCliError {
    Io(io::Error),
    Compute(TrackerError),
}

impl From<io::Error> for TrackerCliError {
    fn from(e: io::Error) -> Self {
        TrackerCliError::Io(e)
    }
}

impl From<TrackerError> for TrackerCliError {
    fn from(e: TrackerError) -> Self {
        TrackerCliError::Compute(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<TrackerCliError> for CliError {
    fn from(e: TrackerCliError) -> Self {
        match e {
            TrackerCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check that stdout is writable".to_string()),
            },
            TrackerCliError::Compute(e) => {
                let (code, hint) = match &e {
                    TrackerError::UnknownWorkoutType(_) => {
                        ("UNKNOWN_WORKOUT_TYPE", Some("Use one of RUN, WLK, SWM"))
                    }
                    TrackerError::InvalidArgumentCount { .. } => (
                        "INVALID_ARGUMENT_COUNT",
                        Some("RUN takes 3 values, WLK takes 4, SWM takes 5"),
                    ),
                    TrackerError::InvalidArgument { .. } => (
                        "INVALID_ARGUMENT",
                        Some("Counts must be non-negative whole numbers"),
                    ),
                    TrackerError::DivisionByZero { .. } => ("DIVISION_BY_ZERO", None),
                    TrackerError::Json(_) => ("JSON_ERROR", None),
                };
                CliError {
                    code: code.to_string(),
                    message: e.to_string(),
                    hint: hint.map(str::to_string),
                }
            }
        }
    }
}
