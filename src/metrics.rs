//! Metric formulas
//!
//! Every workout exposes the same capability set: distance, mean speed and
//! calories. Running and walking share the default distance and speed formulas;
//! swimming uses its own stroke length and derives speed from pool laps.

use crate::error::TrackerError;
use crate::summary::SummaryRecord;
use crate::types::{Running, SportsWalking, Swimming, Workout, WorkoutBase, WorkoutKind};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Step length shared by running and walking (meters)
pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;

/// Running calorie coefficients
pub mod running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie coefficients
pub mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming stroke length and calorie coefficients
pub mod swimming {
    pub const STROKE_LENGTH_M: f64 = 1.38;
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Capability set implemented by every workout record
pub trait WorkoutMetrics {
    /// Shared input fields
    fn base(&self) -> &WorkoutBase;

    /// Kind tag, used for the display label
    fn kind(&self) -> WorkoutKind;

    /// Distance covered per action (meters)
    fn step_length_m(&self) -> f64 {
        DEFAULT_STEP_LENGTH_M
    }

    /// Distance covered (km)
    fn distance_km(&self) -> f64 {
        self.base().action_count as f64 * self.step_length_m() / M_IN_KM
    }

    /// Average speed over the whole workout (km/h)
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_hours
    }

    /// Energy spent (kcal)
    fn calories_kcal(&self) -> f64;

    /// Reject inputs the formulas would divide by
    fn check_divisors(&self) -> Result<(), TrackerError> {
        if self.base().duration_hours == 0.0 {
            return Err(TrackerError::DivisionByZero {
                field: "duration_hours",
            });
        }
        Ok(())
    }

    /// Compute the summary snapshot for this workout
    fn summary(&self) -> Result<SummaryRecord, TrackerError> {
        SummaryRecord::from_workout(self)
    }
}

impl WorkoutMetrics for Running {
    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn calories_kcal(&self) -> f64 {
        let base = &self.base;
        (running::SPEED_MULTIPLIER * self.mean_speed_kmh() - running::SPEED_SHIFT)
            * base.weight_kg
            / M_IN_KM
            * (base.duration_hours * MIN_IN_H)
    }
}

impl WorkoutMetrics for SportsWalking {
    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn calories_kcal(&self) -> f64 {
        let base = &self.base;
        // speed^2 / height counts whole units only
        let speed_height_term = (self.mean_speed_kmh().powi(2) / self.height_cm).floor();
        (walking::WEIGHT_MULTIPLIER * base.weight_kg
            + speed_height_term * walking::SPEED_HEIGHT_MULTIPLIER * base.weight_kg)
            * (base.duration_hours * MIN_IN_H)
    }

    fn check_divisors(&self) -> Result<(), TrackerError> {
        if self.base.duration_hours == 0.0 {
            return Err(TrackerError::DivisionByZero {
                field: "duration_hours",
            });
        }
        if self.height_cm == 0.0 {
            return Err(TrackerError::DivisionByZero { field: "height_cm" });
        }
        Ok(())
    }
}

impl WorkoutMetrics for Swimming {
    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn step_length_m(&self) -> f64 {
        swimming::STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps_count as f64 / M_IN_KM / self.base.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + swimming::SPEED_SHIFT)
            * swimming::WEIGHT_MULTIPLIER
            * self.base.weight_kg
    }
}

impl Workout {
    fn as_metrics(&self) -> &dyn WorkoutMetrics {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl WorkoutMetrics for Workout {
    fn base(&self) -> &WorkoutBase {
        self.as_metrics().base()
    }

    fn kind(&self) -> WorkoutKind {
        self.as_metrics().kind()
    }

    fn step_length_m(&self) -> f64 {
        self.as_metrics().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_metrics().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_metrics().mean_speed_kmh()
    }

    fn calories_kcal(&self) -> f64 {
        self.as_metrics().calories_kcal()
    }

    fn check_divisors(&self) -> Result<(), TrackerError> {
        self.as_metrics().check_divisors()
    }
}
