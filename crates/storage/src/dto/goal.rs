use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::books::GoalBook;
use crate::models::{Goal, GoalType, minutes_seconds_to_secs};
use crate::services::{formatting::format_measurement, goal_list::partition_goals};

/// Response for a single goal, with its computed progress
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoalResponse {
    pub goal_id: Uuid,
    pub title: String,
    pub exercise: String,
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
    /// Percent toward the target, 0 to 100
    pub progress: Decimal,
    pub start_display: Option<String>,
    pub current_display: Option<String>,
    pub target_display: Option<String>,
}

/// Goals of the current user, newest first, split by completion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoalListResponse {
    pub active: Vec<GoalResponse>,
    pub completed: Vec<GoalResponse>,
}

/// Request payload for creating a goal
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGoalRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Exercise must be between 1 and 255 characters"
    ))]
    pub exercise: String,

    pub goal_type: GoalType,

    /// Defaults to the goal type's unit
    #[validate(length(min = 1, max = 32))]
    pub unit: Option<String>,

    #[validate(custom(function = "validate_measurement"))]
    pub start_value: Option<Decimal>,

    /// Defaults to `start_value`
    #[validate(custom(function = "validate_measurement"))]
    pub current_value: Option<Decimal>,

    #[validate(custom(function = "validate_measurement"))]
    pub target_value: Option<Decimal>,

    #[validate(custom(function = "validate_measurement"))]
    pub secondary_value: Option<Decimal>,

    #[validate(length(max = 32))]
    pub secondary_unit: Option<String>,
}

impl CreateGoalRequest {
    pub fn resolved_unit(&self) -> &str {
        self.unit
            .as_deref()
            .unwrap_or_else(|| self.goal_type.default_unit())
    }

    pub fn resolved_current_value(&self) -> Option<Decimal> {
        self.current_value.or(self.start_value)
    }
}

/// Request payload for editing a goal. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateGoalRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub exercise: Option<String>,

    #[validate(length(min = 1, max = 32))]
    pub unit: Option<String>,

    #[validate(custom(function = "validate_measurement"))]
    pub start_value: Option<Decimal>,

    #[validate(custom(function = "validate_measurement"))]
    pub target_value: Option<Decimal>,

    #[validate(custom(function = "validate_measurement"))]
    pub secondary_value: Option<Decimal>,

    #[validate(length(max = 32))]
    pub secondary_unit: Option<String>,
}

/// Increment (positive) or decrement (negative) the current value.
/// The stored value never drops below zero.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AdjustGoalRequest {
    #[validate(custom(function = "validate_delta"))]
    pub delta: Decimal,
}

/// Sets the current value directly.
///
/// Time goals may send `minutes` and `seconds` instead of `value`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetCurrentValueRequest {
    #[validate(custom(function = "validate_measurement"))]
    pub value: Option<Decimal>,
    pub minutes: Option<String>,
    pub seconds: Option<String>,
}

impl SetCurrentValueRequest {
    /// The value to store, or `None` when nothing was sent
    pub fn resolve(&self) -> Option<Decimal> {
        if let Some(value) = self.value {
            return Some(value);
        }

        if self.minutes.is_none() && self.seconds.is_none() {
            return None;
        }

        Some(minutes_seconds_to_secs(
            self.minutes.as_deref(),
            self.seconds.as_deref(),
        ))
    }
}

/// Largest value a goal measurement column holds (`NUMERIC(12, 2)`)
pub const MAX_MEASUREMENT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// Measurements are stored with two decimals, between 0 and [`MAX_MEASUREMENT`]
pub fn validate_measurement(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = validator::ValidationError::new("negative_value");
        error.message = Some("Value cannot be negative".into());
        return Err(error);
    }
    validate_magnitude(value)
}

fn validate_delta(delta: &Decimal) -> Result<(), validator::ValidationError> {
    validate_magnitude(delta)
}

fn validate_magnitude(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.abs() > MAX_MEASUREMENT {
        let mut error = validator::ValidationError::new("out_of_range");
        error.message = Some("Value is too large".into());
        return Err(error);
    }
    if value.normalize().scale() > 2 {
        let mut error = validator::ValidationError::new("too_precise");
        error.message = Some("Value can have at most two decimals".into());
        return Err(error);
    }
    Ok(())
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        let progress = goal.progress();
        let display = |value: Option<Decimal>| value.map(|v| format_measurement(v, &goal.unit));

        Self {
            start_display: display(goal.start_value),
            current_display: display(goal.current_value),
            target_display: display(goal.target_value),
            goal_id: goal.goal_id,
            title: goal.title,
            exercise: goal.exercise,
            goal_type: goal.goal_type,
            unit: goal.unit,
            start_value: goal.start_value,
            current_value: goal.current_value,
            target_value: goal.target_value,
            secondary_value: goal.secondary_value,
            secondary_unit: goal.secondary_unit,
            completed: goal.completed,
            completed_at: goal.completed_at,
            created_at: goal.created_at,
            progress,
        }
    }
}

impl From<&GoalBook> for GoalListResponse {
    fn from(book: &GoalBook) -> Self {
        let partition = partition_goals(book.to_vec());

        Self {
            active: partition.active.into_iter().map(GoalResponse::from).collect(),
            completed: partition
                .completed
                .into_iter()
                .map(GoalResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(goal_type: GoalType) -> CreateGoalRequest {
        CreateGoalRequest {
            title: "5k".to_string(),
            exercise: "Running".to_string(),
            goal_type,
            unit: None,
            start_value: Some(Decimal::from(1800)),
            current_value: None,
            target_value: Some(Decimal::from(1500)),
            secondary_value: None,
            secondary_unit: None,
        }
    }

    #[test]
    fn test_create_defaults() {
        let request = create_request(GoalType::Time);

        assert_eq!(request.resolved_unit(), "seconds");
        assert_eq!(request.resolved_current_value(), Some(Decimal::from(1800)));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_negative_and_blank() {
        let mut request = create_request(GoalType::Distance);
        request.title = String::new();
        request.target_value = Some(Decimal::from(-1));

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("target_value"));
    }

    #[test]
    fn test_values_must_fit_the_column() {
        let mut request = create_request(GoalType::Distance);
        request.target_value = Some(Decimal::new(3105, 3));
        request.start_value = Some(Decimal::from(10_000_000_000i64));

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("target_value"));
        assert!(fields.contains_key("start_value"));

        request.target_value = Some(Decimal::new(31000, 4));
        request.start_value = Some(MAX_MEASUREMENT);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_adjust_delta_may_be_negative_but_bounded() {
        let down = AdjustGoalRequest {
            delta: Decimal::from(-5),
        };
        assert!(down.validate().is_ok());

        let huge = AdjustGoalRequest {
            delta: Decimal::MAX,
        };
        assert!(huge.validate().is_err());

        let precise = AdjustGoalRequest {
            delta: Decimal::new(-1, 3),
        };
        assert!(precise.validate().is_err());
    }

    #[test]
    fn test_set_current_value_from_minutes_and_seconds() {
        let request = SetCurrentValueRequest {
            value: None,
            minutes: Some("25".to_string()),
            seconds: Some("30".to_string()),
        };
        assert_eq!(request.resolve(), Some(Decimal::from(1530)));

        assert_eq!(SetCurrentValueRequest::default().resolve(), None);
    }

    #[test]
    fn test_response_carries_progress_and_display() {
        let goal = Goal {
            goal_id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            title: "Faster 5k".to_string(),
            exercise: "Running".to_string(),
            goal_type: GoalType::Time,
            unit: "seconds".to_string(),
            start_value: Some(Decimal::from(1800)),
            current_value: Some(Decimal::from(1650)),
            target_value: Some(Decimal::from(1500)),
            secondary_value: None,
            secondary_unit: None,
            completed: false,
            completed_at: None,
            created_at: NaiveDateTime::default(),
        };

        let response = GoalResponse::from(goal);

        assert_eq!(response.progress, Decimal::from(50));
        assert_eq!(response.current_display.as_deref(), Some("27m 30s"));
        assert_eq!(response.target_display.as_deref(), Some("25m 0s"));
    }

    fn stored_goal(title: &str) -> Goal {
        Goal {
            goal_id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            title: title.to_string(),
            exercise: "Bench Press".to_string(),
            goal_type: GoalType::OneRepMax,
            unit: "lbs".to_string(),
            start_value: Some(Decimal::from(200)),
            current_value: Some(Decimal::from(200)),
            target_value: Some(Decimal::from(250)),
            secondary_value: None,
            secondary_unit: None,
            completed: false,
            completed_at: None,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_list_response_after_change() {
        let older = stored_goal("older");
        let newer = stored_goal("newer");
        let book = GoalBook::from_store(vec![older.clone(), newer]);

        let mut done = older;
        done.completed = true;
        let created = stored_goal("created");

        let response = GoalListResponse::from(&book.add_or_update(done).add_or_update(created));

        let active: Vec<&str> = response.active.iter().map(|g| g.title.as_str()).collect();
        let completed: Vec<&str> = response.completed.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(active, vec!["created", "newer"]);
        assert_eq!(completed, vec!["older"]);
    }
}
