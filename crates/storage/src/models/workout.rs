use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Exercise;
use crate::services::totals::compute_totals;

/// A logged session. Exercises keep the order the user arranged them in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub workout_id: Uuid,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = Vec<Exercise>)]
    pub exercises: Json<Vec<Exercise>>,
    pub weight_unit: String,
    pub distance_unit: String,
    /// Totals captured when the workout was saved
    #[schema(value_type = WorkoutTotals)]
    pub totals: Json<WorkoutTotals>,
    pub completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl Workout {
    /// Totals recomputed from the current exercises
    pub fn live_totals(&self) -> WorkoutTotals {
        compute_totals(&self.exercises.0)
    }
}

/// Summed training load of a workout. `total_time` is in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct WorkoutTotals {
    pub volume: Decimal,
    pub total_reps: Decimal,
    pub total_distance: Decimal,
    pub total_time: Decimal,
}
