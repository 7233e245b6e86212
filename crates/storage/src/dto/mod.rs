pub mod exercise;
pub mod goal;
pub mod progress;
pub mod workout;
