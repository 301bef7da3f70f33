//! Core types for the workout tracker
//!
//! Workout records share a common [`WorkoutBase`] embedded by value; each variant
//! adds only its own sensor fields. [`Workout`] is the closed set of all variants.

use serde::{Deserialize, Serialize};

/// Workout kind tag, carrying the package code and the display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// All kinds, in dispatch order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ];

    /// Sensor package code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown in the summary line
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package of this kind carries
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

/// Fields every workout carries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutBase {
    /// Steps or strokes recorded by the sensor
    pub action_count: u32,
    /// Workout duration (hours)
    pub duration_hours: f64,
    /// Athlete weight (kg)
    pub weight_kg: f64,
}

impl WorkoutBase {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    pub base: WorkoutBase,
}

impl Running {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            base: WorkoutBase::new(action_count, duration_hours, weight_kg),
        }
    }
}

/// Sports walking workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    pub base: WorkoutBase,
    /// Athlete height (cm)
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: WorkoutBase::new(action_count, duration_hours, weight_kg),
            height_cm,
        }
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    pub base: WorkoutBase,
    /// Pool length (meters)
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub pool_laps_count: u32,
}

impl Swimming {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps_count: u32,
    ) -> Self {
        Self {
            base: WorkoutBase::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_laps_count,
        }
    }
}

/// A workout record of any supported kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl From<Running> for Workout {
    fn from(workout: Running) -> Self {
        Workout::Running(workout)
    }
}

impl From<SportsWalking> for Workout {
    fn from(workout: SportsWalking) -> Self {
        Workout::SportsWalking(workout)
    }
}

impl From<Swimming> for Workout {
    fn from(workout: Swimming) -> Self {
        Workout::Swimming(workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_round_trip() {
        for kind in WorkoutKind::ALL {
            assert_eq!(WorkoutKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(WorkoutKind::from_code("XYZ"), None);
        assert_eq!(WorkoutKind::from_code("run"), None);
    }

    #[test]
    fn test_kind_labels_and_arity() {
        assert_eq!(WorkoutKind::Running.label(), "Running");
        assert_eq!(WorkoutKind::SportsWalking.label(), "SportsWalking");
        assert_eq!(WorkoutKind::Swimming.label(), "Swimming");

        assert_eq!(WorkoutKind::Running.arity(), 3);
        assert_eq!(WorkoutKind::SportsWalking.arity(), 4);
        assert_eq!(WorkoutKind::Swimming.arity(), 5);
    }

    #[test]
    fn test_workout_serializes_with_type_tag() {
        let workout: Workout = SportsWalking::new(9000, 1.0, 75.0, 180.0).into();
        let json = serde_json::to_value(workout).unwrap();

        assert_eq!(json["type"], "sports_walking");
        assert_eq!(json["base"]["action_count"], 9000);
        assert_eq!(json["height_cm"], 180.0);
    }
}
