//! Summary formatting
//!
//! Builds the immutable [`SummaryRecord`] snapshot of a workout and renders the
//! fixed-format summary line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::metrics::WorkoutMetrics;

/// Computed metrics for a single workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Display label of the workout kind
    pub workout_type: String,
    /// Workout duration (hours)
    pub duration_hours: f64,
    /// Distance covered (km)
    pub distance_km: f64,
    /// Average speed (km/h)
    pub mean_speed_kmh: f64,
    /// Energy spent (kcal)
    pub calories_kcal: f64,
}

impl SummaryRecord {
    /// Evaluate every metric of a workout once.
    ///
    /// Fails with [`TrackerError::DivisionByZero`] when the workout has a zero
    /// divisor, instead of producing infinite or NaN metrics.
    pub fn from_workout<W: WorkoutMetrics + ?Sized>(workout: &W) -> Result<Self, TrackerError> {
        workout.check_divisors()?;

        Ok(Self {
            workout_type: workout.kind().label().to_string(),
            duration_hours: workout.base().duration_hours,
            distance_km: workout.distance_km(),
            mean_speed_kmh: workout.mean_speed_kmh(),
            calories_kcal: workout.calories_kcal(),
        })
    }

    /// Render the summary line
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Encode to a compact JSON string
    pub fn to_json(&self) -> Result<String, TrackerError> {
        serde_json::to_string(self).map_err(TrackerError::Json)
    }
}

impl fmt::Display for SummaryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Running, SportsWalking, Swimming, Workout};
    use pretty_assertions::assert_eq;

    fn decimals_after_point(token: &str) -> usize {
        token
            .split_once('.')
            .map(|(_, frac)| frac.len())
            .unwrap_or(0)
    }

    #[test]
    fn test_swimming_message() {
        let summary = Swimming::new(720, 1.0, 80.0, 25.0, 40).summary().unwrap();

        assert_eq!(
            summary.message(),
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_running_message() {
        let summary = Running::new(15000, 1.0, 75.0).summary().unwrap();

        assert_eq!(
            summary.message(),
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn test_walking_message() {
        let summary = SportsWalking::new(9000, 1.0, 75.0, 180.0)
            .summary()
            .unwrap();

        assert_eq!(
            summary.message(),
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
             Avg speed: 5.850 km/h; Calories burned: 157.500."
        );
    }

    #[test]
    fn test_three_decimals_regardless_of_magnitude() {
        let summary = SummaryRecord {
            workout_type: "Running".to_string(),
            duration_hours: 0.0001,
            distance_km: 123_456.789_12,
            mean_speed_kmh: 7.0,
            calories_kcal: 1e-9,
        };
        let message = summary.message();
        let numbers: Vec<&str> = message
            .split(' ')
            .filter(|t| t.starts_with(|c: char| c.is_ascii_digit()))
            .map(|t| t.trim_end_matches(&['.', ';'][..]))
            .collect();

        assert_eq!(numbers, vec!["0.000", "123456.789", "7.000", "0.000"]);
        assert!(numbers.iter().all(|n| decimals_after_point(n) == 3));
    }

    #[test]
    fn test_summary_from_workout_enum() {
        let workout: Workout = Running::new(15000, 1.0, 75.0).into();
        let summary = SummaryRecord::from_workout(&workout).unwrap();

        assert_eq!(summary.workout_type, "Running");
        assert_eq!(summary.duration_hours, 1.0);
        assert!((summary.distance_km - 9.75).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_is_division_error() {
        let result = Running::new(15000, 0.0, 75.0).summary();
        assert!(matches!(
            result,
            Err(TrackerError::DivisionByZero {
                field: "duration_hours"
            })
        ));
    }

    #[test]
    fn test_summary_json() {
        let summary = Swimming::new(720, 1.0, 80.0, 25.0, 40).summary().unwrap();
        let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();

        assert_eq!(json["workout_type"], "Swimming");
        assert_eq!(json["calories_kcal"], 336.0);
        assert_eq!(json["mean_speed_kmh"], 1.0);
    }
}
