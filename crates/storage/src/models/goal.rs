use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::GoalType;
use crate::services::progress::compute_progress;

/// A user-defined numeric target tracked from `start_value` toward `target_value`.
///
/// `secondary_value`/`secondary_unit` carry the fixed weight of a max-reps goal
/// ("max reps at 135 lbs").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Goal {
    pub goal_id: Uuid,
    pub user_id: String,
    pub title: String,
    pub exercise: String,
    #[sqlx(try_from = "String")]
    pub goal_type: GoalType,
    pub unit: String,
    pub start_value: Option<Decimal>,
    pub current_value: Option<Decimal>,
    pub target_value: Option<Decimal>,
    pub secondary_value: Option<Decimal>,
    pub secondary_unit: Option<String>,
    pub completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl Goal {
    /// Progress toward the target in percent, `0..=100`
    pub fn progress(&self) -> Decimal {
        compute_progress(self.start_value, self.current_value, self.target_value)
    }

    /// Current value after adding `delta`, floored at 0
    pub fn adjusted_current_value(&self, delta: Decimal) -> Decimal {
        self.current_value
            .unwrap_or_default()
            .saturating_add(delta)
            .max(Decimal::ZERO)
    }

    pub fn has_reached_target(&self) -> bool {
        self.progress() >= Decimal::ONE_HUNDRED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(current: Option<Decimal>) -> Goal {
        Goal {
            goal_id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            title: "Pull-ups".to_string(),
            exercise: "Pull-Up".to_string(),
            goal_type: GoalType::MaxReps,
            unit: "reps".to_string(),
            start_value: Some(Decimal::from(5)),
            current_value: current,
            target_value: Some(Decimal::from(15)),
            secondary_value: None,
            secondary_unit: None,
            completed: false,
            completed_at: None,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_adjust_moves_current_value() {
        let goal = goal(Some(Decimal::from(8)));

        assert_eq!(goal.adjusted_current_value(Decimal::from(2)), Decimal::from(10));
        assert_eq!(goal.adjusted_current_value(Decimal::from(-3)), Decimal::from(5));
    }

    #[test]
    fn test_adjust_never_goes_below_zero() {
        assert_eq!(
            goal(Some(Decimal::from(2))).adjusted_current_value(Decimal::from(-5)),
            Decimal::ZERO
        );
        assert_eq!(
            goal(None).adjusted_current_value(Decimal::from(-1)),
            Decimal::ZERO
        );
        assert_eq!(goal(None).adjusted_current_value(Decimal::ONE), Decimal::ONE);
    }

    #[test]
    fn test_reached_target() {
        assert!(goal(Some(Decimal::from(15))).has_reached_target());
        assert!(!goal(Some(Decimal::from(14))).has_reached_target());
    }
}
