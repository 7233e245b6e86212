pub mod exercises;
pub mod goals;
pub mod progress;
pub mod workouts;
