use rust_decimal::Decimal;

use crate::models::{Exercise, SetMetrics, WorkoutTotals};

/// Sums volume, reps, distance and time over every set of every exercise.
///
/// Strength sets add `reps * weight` to volume and their reps; core sets add
/// reps and time; cardio sets add distance and time. Sums saturate at
/// `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
pub fn compute_totals(exercises: &[Exercise]) -> WorkoutTotals {
    let mut totals = WorkoutTotals::default();

    for exercise in exercises {
        let category = exercise.kind();

        for set in &exercise.sets {
            match set.metrics(category) {
                SetMetrics::Strength { reps, weight } => {
                    totals.volume = totals.volume.saturating_add(reps.saturating_mul(weight));
                    totals.total_reps = totals.total_reps.saturating_add(reps);
                }
                SetMetrics::Core {
                    reps,
                    duration_secs,
                } => {
                    totals.total_reps = totals.total_reps.saturating_add(reps);
                    totals.total_time = totals.total_time.saturating_add(duration_secs);
                }
                SetMetrics::Cardio {
                    distance,
                    duration_secs,
                } => {
                    totals.total_distance = totals.total_distance.saturating_add(distance);
                    totals.total_time = totals.total_time.saturating_add(duration_secs);
                }
            }
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutSet;
    use uuid::Uuid;

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn exercise(name: &str, category: &str, sets: Vec<WorkoutSet>) -> Exercise {
        Exercise {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            sets,
        }
    }

    fn strength_set(reps: &str, weight: &str) -> WorkoutSet {
        WorkoutSet {
            reps: text(reps),
            weight: text(weight),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_exercises() {
        let totals = compute_totals(&[]);
        assert_eq!(totals, WorkoutTotals::default());
    }

    #[test]
    fn test_strength_volume_and_reps() {
        let bench = exercise(
            "Bench Press",
            "Chest",
            vec![strength_set("5", "100"), strength_set("3", "110")],
        );

        let totals = compute_totals(&[bench]);

        assert_eq!(totals.volume, Decimal::from(830));
        assert_eq!(totals.total_reps, Decimal::from(8));
        assert_eq!(totals.total_distance, Decimal::ZERO);
        assert_eq!(totals.total_time, Decimal::ZERO);
    }

    #[test]
    fn test_cardio_distance_and_time() {
        let run = exercise(
            "Running",
            "Cardio",
            vec![WorkoutSet {
                distance: text("2"),
                minutes: text("10"),
                seconds: text("30"),
                ..Default::default()
            }],
        );

        let totals = compute_totals(&[run]);

        assert_eq!(totals.total_distance, Decimal::from(2));
        assert_eq!(totals.total_time, Decimal::from(630));
        assert_eq!(totals.volume, Decimal::ZERO);
        assert_eq!(totals.total_reps, Decimal::ZERO);
    }

    #[test]
    fn test_core_reps_and_time() {
        let crunches = exercise(
            "Crunches",
            "core",
            vec![WorkoutSet {
                reps: text("20"),
                minutes: text("1"),
                seconds: text("0"),
                ..Default::default()
            }],
        );

        let totals = compute_totals(&[crunches]);

        assert_eq!(totals.total_reps, Decimal::from(20));
        assert_eq!(totals.total_time, Decimal::from(60));
        assert_eq!(totals.volume, Decimal::ZERO);
    }

    #[test]
    fn test_mixed_workout() {
        let exercises = vec![
            exercise("Squat", "Legs", vec![strength_set("5", "200")]),
            exercise(
                "Plank",
                "Core",
                vec![WorkoutSet {
                    minutes: text("2"),
                    ..Default::default()
                }],
            ),
            exercise(
                "Cycling",
                "CARDIO",
                vec![WorkoutSet {
                    distance: text("5.5"),
                    minutes: text("20"),
                    seconds: text("15"),
                    ..Default::default()
                }],
            ),
        ];

        let totals = compute_totals(&exercises);

        assert_eq!(totals.volume, Decimal::from(1000));
        assert_eq!(totals.total_reps, Decimal::from(5));
        assert_eq!(totals.total_distance, Decimal::new(55, 1));
        assert_eq!(totals.total_time, Decimal::from(120 + 1215));
    }

    #[test]
    fn test_blank_and_invalid_fields_count_as_zero() {
        let curls = exercise(
            "Bicep Curl",
            "Biceps",
            vec![
                strength_set("", "50"),
                strength_set("ten", "50"),
                strength_set("10", ""),
                WorkoutSet::default(),
            ],
        );

        let totals = compute_totals(&[curls]);

        assert_eq!(totals.volume, Decimal::ZERO);
        assert_eq!(totals.total_reps, Decimal::from(10));
    }

    #[test]
    fn test_strength_ignores_cardio_fields() {
        let press = exercise(
            "Overhead Press",
            "Shoulders",
            vec![WorkoutSet {
                reps: text("5"),
                weight: text("95"),
                distance: text("3"),
                minutes: text("4"),
                ..Default::default()
            }],
        );

        let totals = compute_totals(&[press]);

        assert_eq!(totals.total_distance, Decimal::ZERO);
        assert_eq!(totals.total_time, Decimal::ZERO);
        assert_eq!(totals.volume, Decimal::from(475));
    }

    #[test]
    fn test_huge_values_saturate() {
        let max = Decimal::MAX.to_string();
        let heavy = exercise(
            "Deadlift",
            "Back",
            vec![strength_set(&max, "2"), strength_set(&max, &max)],
        );
        let long_run = exercise(
            "Running",
            "Cardio",
            vec![
                WorkoutSet {
                    distance: text(&max),
                    minutes: text(&max),
                    ..Default::default()
                },
                WorkoutSet {
                    distance: text("1"),
                    seconds: text("1"),
                    ..Default::default()
                },
            ],
        );

        let totals = compute_totals(&[heavy, long_run]);

        assert_eq!(totals.volume, Decimal::MAX);
        assert_eq!(totals.total_reps, Decimal::MAX);
        assert_eq!(totals.total_distance, Decimal::MAX);
        assert_eq!(totals.total_time, Decimal::MAX);
    }
}
