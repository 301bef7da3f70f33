//! End-to-end checks over the public pipeline API

use pretty_assertions::assert_eq;
use workout_tracker::{process_package, run_samples, TrackerError, WorkoutMetrics, WorkoutProcessor};

#[test]
fn sample_packages_render_expected_lines() {
    let lines = run_samples().unwrap();

    assert_eq!(
        lines,
        vec![
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000."
                .to_string(),
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 699.750."
                .to_string(),
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
             Avg speed: 5.850 km/h; Calories burned: 157.500."
                .to_string(),
        ]
    );
}

#[test]
fn unknown_code_aborts_processing() {
    let err = process_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, TrackerError::UnknownWorkoutType(ref code) if code == "XYZ"));
}

#[test]
fn wrong_count_is_an_explicit_error() {
    let err = process_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid argument count for RUN: expected 3, got 4"
    );
}

#[test]
fn zero_height_walking_is_division_error() {
    let err = process_package("WLK", &[9000.0, 1.0, 75.0, 0.0]).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::DivisionByZero { field: "height_cm" }
    ));
}

#[test]
fn dispatched_records_share_the_metric_contract() {
    let swim = workout_tracker::read_package("SWM", &[720.0, 2.0, 80.0, 25.0, 40.0]).unwrap();
    assert!((swim.mean_speed_kmh() - 25.0 * 40.0 / 1000.0 / 2.0).abs() < 1e-9);

    let walk = workout_tracker::read_package("WLK", &[9000.0, 2.0, 75.0, 180.0]).unwrap();
    assert!((walk.mean_speed_kmh() - walk.distance_km() / 2.0).abs() < 1e-9);

    let mut processor = WorkoutProcessor::new();
    let summaries = processor
        .process_all([("RUN", &[15000.0, 1.0, 75.0][..])])
        .unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].workout_type, "Running");
}
