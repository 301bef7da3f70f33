//! Error types for the workout tracker

use thiserror::Error;

/// Errors that can occur while dispatching or summarizing a workout
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("Invalid argument count for {code}: expected {expected}, got {got}")]
    InvalidArgumentCount {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid value for {code} field {field}: {value}")]
    InvalidArgument {
        code: String,
        field: &'static str,
        value: f64,
    },

    #[error("Division by zero: {field} must be non-zero")]
    DivisionByZero { field: &'static str },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
