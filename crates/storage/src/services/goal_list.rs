use serde::Serialize;

use crate::models::Goal;

/// Goals split by completion, each side in the order it was given.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GoalPartition {
    pub active: Vec<Goal>,
    pub completed: Vec<Goal>,
}

pub fn partition_goals(goals: impl IntoIterator<Item = Goal>) -> GoalPartition {
    let (completed, active): (Vec<Goal>, Vec<Goal>) =
        goals.into_iter().partition(|goal| goal.completed);
    GoalPartition { active, completed }
}

/// Store reads come back oldest first; lists are shown newest first.
pub fn newest_first<T>(mut items: Vec<T>) -> Vec<T> {
    items.reverse();
    items
}
