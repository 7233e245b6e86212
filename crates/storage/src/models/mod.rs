pub mod catalog;
pub mod exercise;
pub mod goal;
pub mod goal_type;
pub mod workout;

pub use catalog::{CatalogExercise, EXERCISE_CATALOG, search_catalog};
pub use exercise::{
    Exercise, ExerciseCategory, SetMetrics, SetType, WorkoutSet, minutes_seconds_to_secs,
    parse_measure,
};
pub use goal::Goal;
pub use goal_type::{GoalType, ParseGoalTypeError};
pub use workout::{Workout, WorkoutTotals};
