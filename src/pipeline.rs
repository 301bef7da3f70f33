//! Pipeline orchestration
//!
//! This module provides the public API for the workout tracker.
//! It runs raw sensor packages through dispatch and summary rendering.

use tracing::debug;

use crate::dispatcher::read_package;
use crate::error::TrackerError;
use crate::metrics::WorkoutMetrics;
use crate::summary::SummaryRecord;

/// A raw sensor package: workout-type code and its positional readings
pub type Package<'a> = (&'a str, &'a [f64]);

/// Demonstration packages processed by the `tracker` binary
pub const SAMPLE_PACKAGES: [Package<'static>; 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Convert a single sensor package into its summary.
///
/// # Arguments
/// * `code` - Workout-type code (`RUN`, `WLK` or `SWM`)
/// * `values` - Positional readings for that workout type
///
/// # Example
/// ```ignore
/// let summary = process_package("RUN", &[15000.0, 1.0, 75.0])?;
/// println!("{summary}");
/// ```
pub fn process_package(code: &str, values: &[f64]) -> Result<SummaryRecord, TrackerError> {
    let workout = read_package(code, values)?;
    workout.summary()
}

/// Batch processor for a list of sensor packages.
///
/// Packages are processed in order; the first failing package aborts the batch.
#[derive(Debug, Default)]
pub struct WorkoutProcessor {
    summaries: Vec<SummaryRecord>,
}

impl WorkoutProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process every package, keeping the summaries of those processed so far
    pub fn process_all<'a, I>(&mut self, packages: I) -> Result<&[SummaryRecord], TrackerError>
    where
        I: IntoIterator<Item = Package<'a>>,
    {
        for (index, (code, values)) in packages.into_iter().enumerate() {
            debug!(index, code, "processing sensor package");
            let summary = process_package(code, values)?;
            self.summaries.push(summary);
        }
        Ok(&self.summaries)
    }

    /// Summaries collected so far
    pub fn summaries(&self) -> &[SummaryRecord] {
        &self.summaries
    }

    /// One summary line per processed package
    pub fn messages(&self) -> Vec<String> {
        self.summaries.iter().map(SummaryRecord::message).collect()
    }

    /// Encode the collected summaries as a JSON array
    pub fn to_json(&self, pretty: bool) -> Result<String, TrackerError> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.summaries)?
        } else {
            serde_json::to_string(&self.summaries)?
        };
        Ok(json)
    }
}

/// Run the demonstration packages and return one summary line per package
pub fn run_samples() -> Result<Vec<String>, TrackerError> {
    let mut processor = WorkoutProcessor::new();
    processor.process_all(SAMPLE_PACKAGES)?;
    Ok(processor.messages())
}
