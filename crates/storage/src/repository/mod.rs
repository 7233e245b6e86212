pub mod goal;
pub mod workout;
