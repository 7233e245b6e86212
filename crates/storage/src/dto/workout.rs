use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::books::WorkoutBook;
use crate::models::{Exercise, Workout, WorkoutTotals};
use crate::services::formatting::format_duration_decimal;
use crate::services::totals::compute_totals;

pub const DEFAULT_WEIGHT_UNIT: &str = "lbs";
pub const DEFAULT_DISTANCE_UNIT: &str = "miles";

/// Request payload for saving a workout built on the client
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    #[validate(
        length(max = 255, message = "Title must be at most 255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "Add at least one exercise"))]
    pub exercises: Vec<Exercise>,

    #[validate(length(min = 1, max = 16))]
    pub weight_unit: Option<String>,

    #[validate(length(min = 1, max = 16))]
    pub distance_unit: Option<String>,
}

impl CreateWorkoutRequest {
    pub fn resolved_weight_unit(&self) -> &str {
        self.weight_unit.as_deref().unwrap_or(DEFAULT_WEIGHT_UNIT)
    }

    pub fn resolved_distance_unit(&self) -> &str {
        self.distance_unit.as_deref().unwrap_or(DEFAULT_DISTANCE_UNIT)
    }

    pub fn trimmed_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// Exercises to total without saving anything
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TotalsRequest {
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TotalsResponse {
    pub volume: Decimal,
    pub total_reps: Decimal,
    pub total_distance: Decimal,
    /// Seconds
    pub total_time: Decimal,
    pub formatted_time: String,
}

impl From<WorkoutTotals> for TotalsResponse {
    fn from(totals: WorkoutTotals) -> Self {
        Self {
            volume: totals.volume,
            total_reps: totals.total_reps,
            total_distance: totals.total_distance,
            total_time: totals.total_time,
            formatted_time: format_duration_decimal(totals.total_time),
        }
    }
}

impl From<&TotalsRequest> for TotalsResponse {
    fn from(request: &TotalsRequest) -> Self {
        compute_totals(&request.exercises).into()
    }
}

/// Short form used by workout lists, with the totals saved alongside the workout
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutSummaryResponse {
    pub workout_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub exercise_count: usize,
    pub weight_unit: String,
    pub distance_unit: String,
    pub completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub totals: TotalsResponse,
}

/// Full workout with totals recomputed from its exercises
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutResponse {
    pub workout_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub exercises: Vec<Exercise>,
    pub weight_unit: String,
    pub distance_unit: String,
    pub completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub totals: TotalsResponse,
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some("Please enter a workout title".into());
        return Err(error);
    }
    Ok(())
}

impl From<Workout> for WorkoutSummaryResponse {
    fn from(workout: Workout) -> Self {
        Self {
            workout_id: workout.workout_id,
            title: workout.title,
            description: workout.description,
            exercise_count: workout.exercises.0.len(),
            weight_unit: workout.weight_unit,
            distance_unit: workout.distance_unit,
            completed: workout.completed,
            completed_at: workout.completed_at,
            created_at: workout.created_at,
            totals: workout.totals.0.into(),
        }
    }
}

/// Summaries of every workout in `book`, in book order
pub fn workout_summaries(book: &WorkoutBook) -> Vec<WorkoutSummaryResponse> {
    book.iter().cloned().map(WorkoutSummaryResponse::from).collect()
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        let totals = workout.live_totals().into();

        Self {
            workout_id: workout.workout_id,
            title: workout.title,
            description: workout.description,
            exercises: workout.exercises.0,
            weight_unit: workout.weight_unit,
            distance_unit: workout.distance_unit,
            completed: workout.completed,
            completed_at: workout.completed_at,
            created_at: workout.created_at,
            totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_title_and_exercises() {
        let request: CreateWorkoutRequest = serde_json::from_str(
            r#"{"title": "   ", "exercises": []}"#,
        )
        .unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("exercises"));
    }

    #[test]
    fn test_create_request_defaults() {
        let request: CreateWorkoutRequest = serde_json::from_str(
            r#"{
                "title": "Push day",
                "description": "  ",
                "exercises": [{"name": "Bench Press", "category": "Chest", "sets": [{"reps": "5", "weight": "135"}]}]
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.resolved_weight_unit(), "lbs");
        assert_eq!(request.resolved_distance_unit(), "miles");
        assert_eq!(request.trimmed_description(), None);
    }

    #[test]
    fn test_totals_from_request() {
        let request: TotalsRequest = serde_json::from_str(
            r#"{"exercises": [{"name": "Running", "category": "Cardio", "sets": [{"distance": 2, "minutes": 10, "seconds": 30}]}]}"#,
        )
        .unwrap();

        let response = TotalsResponse::from(&request);

        assert_eq!(response.total_distance, Decimal::from(2));
        assert_eq!(response.total_time, Decimal::from(630));
        assert_eq!(response.formatted_time, "10m 30s");
    }

    fn saved_workout(title: &str, totals: WorkoutTotals) -> Workout {
        Workout {
            workout_id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            title: title.to_string(),
            description: None,
            exercises: sqlx::types::Json(Vec::new()),
            weight_unit: "kg".to_string(),
            distance_unit: "km".to_string(),
            totals: sqlx::types::Json(totals),
            completed: false,
            completed_at: None,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_summary_uses_saved_totals() {
        let totals = WorkoutTotals {
            volume: Decimal::from(830),
            total_reps: Decimal::from(8),
            total_distance: Decimal::ZERO,
            total_time: Decimal::from(3605),
        };

        let summary = WorkoutSummaryResponse::from(saved_workout("Push day", totals));

        assert_eq!(summary.exercise_count, 0);
        assert_eq!(summary.weight_unit, "kg");
        assert_eq!(summary.totals.volume, Decimal::from(830));
        assert_eq!(summary.totals.total_reps, Decimal::from(8));
        assert_eq!(summary.totals.formatted_time, "1h 5s");
    }

    #[test]
    fn test_summaries_follow_book_order() {
        let book = WorkoutBook::from_store(vec![
            saved_workout("first", WorkoutTotals::default()),
            saved_workout("second", WorkoutTotals::default()),
        ]);

        let titles: Vec<String> = workout_summaries(&book)
            .into_iter()
            .map(|s| s.title)
            .collect();

        assert_eq!(titles, vec!["second", "first"]);
    }
}
