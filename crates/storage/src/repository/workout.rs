use sqlx::{PgPool, types::Json};
use uuid::Uuid;

use crate::dto::workout::CreateWorkoutRequest;
use crate::error::{Result, StorageError};
use crate::models::{Workout, WorkoutTotals};

const WORKOUT_COLUMNS: &str = "workout_id, user_id, title, description, exercises, \
     weight_unit, distance_unit, totals, completed, completed_at, created_at";

/// Workouts collection, always scoped to one user.
pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's workouts in insertion order
    pub async fn list(&self, user_id: &str) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE user_id = $1 ORDER BY seq"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    pub async fn find_by_id(&self, user_id: &str, workout_id: Uuid) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE user_id = $1 AND workout_id = $2"
        ))
        .bind(user_id)
        .bind(workout_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// Persist a workout together with the totals computed for it
    pub async fn create(
        &self,
        user_id: &str,
        req: &CreateWorkoutRequest,
        totals: &WorkoutTotals,
    ) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(&format!(
            r#"
            INSERT INTO workouts (user_id, title, description, exercises,
                                  weight_unit, distance_unit, totals)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(req.title.trim())
        .bind(req.trimmed_description())
        .bind(Json(&req.exercises))
        .bind(req.resolved_weight_unit())
        .bind(req.resolved_distance_unit())
        .bind(Json(totals))
        .fetch_one(self.pool)
        .await?;

        Ok(workout)
    }

    pub async fn set_completed(
        &self,
        user_id: &str,
        workout_id: Uuid,
        completed: bool,
    ) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(&format!(
            r#"
            UPDATE workouts
            SET completed = $3,
                completed_at = CASE WHEN $3 THEN CURRENT_TIMESTAMP ELSE NULL END
            WHERE user_id = $1 AND workout_id = $2
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(workout_id)
        .bind(completed)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    pub async fn delete(&self, user_id: &str, workout_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE user_id = $1 AND workout_id = $2")
            .bind(user_id)
            .bind(workout_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
