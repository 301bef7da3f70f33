//! Workout Tracker - derived fitness metrics from raw workout sensor readings
//!
//! Raw sensor packages flow through a small, deterministic pipeline:
//! dispatch (code + positional readings → workout record) → metric formulas
//! (distance, mean speed, calories) → summary line.
//!
//! ## Workout types
//!
//! - **Running** (`RUN`): steps, duration, weight
//! - **Sports walking** (`WLK`): steps, duration, weight, height
//! - **Swimming** (`SWM`): strokes, duration, weight, pool length, pool laps

pub mod dispatcher;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod summary;
pub mod types;

pub use dispatcher::read_package;
pub use error::TrackerError;
pub use metrics::WorkoutMetrics;
pub use pipeline::{process_package, run_samples, WorkoutProcessor, SAMPLE_PACKAGES};
pub use summary::SummaryRecord;
pub use types::{Running, SportsWalking, Swimming, Workout, WorkoutBase, WorkoutKind};

/// Tracker version
pub const TRACKER_VERSION: &str = env!("CARGO_PKG_VERSION");
