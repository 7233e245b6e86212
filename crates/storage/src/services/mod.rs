pub mod formatting;
pub mod goal_list;
pub mod progress;
pub mod totals;
