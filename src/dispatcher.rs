//! Sensor package dispatch
//!
//! Maps a workout-type code and a flat list of positional readings to the
//! matching workout record.
//!
//! | Code  | Values                                                                  |
//! |-------|-------------------------------------------------------------------------|
//! | `RUN` | `action_count, duration_hours, weight_kg`                               |
//! | `WLK` | `action_count, duration_hours, weight_kg, height_cm`                    |
//! | `SWM` | `action_count, duration_hours, weight_kg, pool_length_m, pool_laps_count` |

use tracing::debug;

use crate::error::TrackerError;
use crate::types::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// Build the workout record for a raw sensor package.
///
/// # Errors
/// * [`TrackerError::UnknownWorkoutType`] if `code` is not `RUN`, `WLK` or `SWM`
/// * [`TrackerError::InvalidArgumentCount`] if `values` has the wrong length for `code`
/// * [`TrackerError::InvalidArgument`] if a value is not finite, or a count is not a whole number
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout, TrackerError> {
    let kind = WorkoutKind::from_code(code)
        .ok_or_else(|| TrackerError::UnknownWorkoutType(code.to_string()))?;

    if values.len() != kind.arity() {
        return Err(TrackerError::InvalidArgumentCount {
            code: code.to_string(),
            expected: kind.arity(),
            got: values.len(),
        });
    }

    debug!(code, arity = values.len(), "dispatching sensor package");

    let fields = PackageFields { kind, values };
    let action_count = fields.count(0, "action_count")?;
    let duration_hours = fields.real(1, "duration_hours")?;
    let weight_kg = fields.real(2, "weight_kg")?;

    let workout: Workout = match kind {
        WorkoutKind::Running => Running::new(action_count, duration_hours, weight_kg).into(),
        WorkoutKind::SportsWalking => SportsWalking::new(
            action_count,
            duration_hours,
            weight_kg,
            fields.real(3, "height_cm")?,
        )
        .into(),
        WorkoutKind::Swimming => Swimming::new(
            action_count,
            duration_hours,
            weight_kg,
            fields.real(3, "pool_length_m")?,
            fields.count(4, "pool_laps_count")?,
        )
        .into(),
    };

    Ok(workout)
}

/// Positional view over a package whose length is already checked
struct PackageFields<'a> {
    kind: WorkoutKind,
    values: &'a [f64],
}

impl PackageFields<'_> {
    fn real(&self, index: usize, field: &'static str) -> Result<f64, TrackerError> {
        let value = self.values[index];
        if !value.is_finite() {
            return Err(self.invalid(field, value));
        }
        Ok(value)
    }

    fn count(&self, index: usize, field: &'static str) -> Result<u32, TrackerError> {
        let value = self.real(index, field)?;
        if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
            return Err(self.invalid(field, value));
        }
        Ok(value as u32)
    }

    fn invalid(&self, field: &'static str, value: f64) -> TrackerError {
        TrackerError::InvalidArgument {
            code: self.kind.code().to_string(),
            field,
            value,
        }
    }
}
