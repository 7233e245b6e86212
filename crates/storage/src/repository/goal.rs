use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::goal::{CreateGoalRequest, UpdateGoalRequest};
use crate::error::{Result, StorageError};
use crate::models::Goal;

const GOAL_COLUMNS: &str = "goal_id, user_id, title, exercise, goal_type, unit, \
     start_value, current_value, target_value, secondary_value, secondary_unit, \
     completed, completed_at, created_at";

/// Goals collection, always scoped to one user. A goal owned by someone else
/// is reported as not found.
pub struct GoalRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GoalRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's goals in insertion order
    pub async fn list(&self, user_id: &str) -> Result<Vec<Goal>> {
        let goals = sqlx::query_as::<_, Goal>(&format!(
            "SELECT {GOAL_COLUMNS} FROM goals WHERE user_id = $1 ORDER BY seq"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(goals)
    }

    pub async fn find_by_id(&self, user_id: &str, goal_id: Uuid) -> Result<Goal> {
        let goal = sqlx::query_as::<_, Goal>(&format!(
            "SELECT {GOAL_COLUMNS} FROM goals WHERE user_id = $1 AND goal_id = $2"
        ))
        .bind(user_id)
        .bind(goal_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(goal)
    }

    pub async fn create(&self, user_id: &str, req: &CreateGoalRequest) -> Result<Goal> {
        let goal = sqlx::query_as::<_, Goal>(&format!(
            r#"
            INSERT INTO goals (user_id, title, exercise, goal_type, unit,
                               start_value, current_value, target_value,
                               secondary_value, secondary_unit)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {GOAL_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(req.title.trim())
        .bind(req.exercise.trim())
        .bind(req.goal_type.as_str())
        .bind(req.resolved_unit())
        .bind(req.start_value)
        .bind(req.resolved_current_value())
        .bind(req.target_value)
        .bind(req.secondary_value)
        .bind(req.secondary_unit.as_deref())
        .fetch_one(self.pool)
        .await?;

        Ok(goal)
    }

    /// Merge the present fields of `req` into the stored goal
    pub async fn update(
        &self,
        user_id: &str,
        existing: &Goal,
        req: &UpdateGoalRequest,
    ) -> Result<Goal> {
        let title = req.title.as_ref().unwrap_or(&existing.title);
        let exercise = req.exercise.as_ref().unwrap_or(&existing.exercise);
        let unit = req.unit.as_ref().unwrap_or(&existing.unit);
        let start_value = req.start_value.or(existing.start_value);
        let target_value = req.target_value.or(existing.target_value);
        let secondary_value = req.secondary_value.or(existing.secondary_value);
        let secondary_unit = req
            .secondary_unit
            .as_ref()
            .or(existing.secondary_unit.as_ref());

        let goal = sqlx::query_as::<_, Goal>(&format!(
            r#"
            UPDATE goals
            SET title = $3,
                exercise = $4,
                unit = $5,
                start_value = $6,
                target_value = $7,
                secondary_value = $8,
                secondary_unit = $9
            WHERE user_id = $1 AND goal_id = $2
            RETURNING {GOAL_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(existing.goal_id)
        .bind(title)
        .bind(exercise)
        .bind(unit)
        .bind(start_value)
        .bind(target_value)
        .bind(secondary_value)
        .bind(secondary_unit)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(goal)
    }

    /// Add `delta` to the current value. A goal without one starts from 0 and
    /// the result never drops below 0.
    pub async fn adjust_current_value(
        &self,
        user_id: &str,
        goal_id: Uuid,
        delta: Decimal,
    ) -> Result<Goal> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Goal>(&format!(
            "SELECT {GOAL_COLUMNS} FROM goals WHERE user_id = $1 AND goal_id = $2 FOR UPDATE"
        ))
        .bind(user_id)
        .bind(goal_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        let goal = sqlx::query_as::<_, Goal>(&format!(
            r#"
            UPDATE goals
            SET current_value = $3
            WHERE user_id = $1 AND goal_id = $2
            RETURNING {GOAL_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(goal_id)
        .bind(existing.adjusted_current_value(delta))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(goal)
    }

    /// Replace the current value, e.g. after a direct edit
    pub async fn set_current_value(
        &self,
        user_id: &str,
        goal_id: Uuid,
        value: Decimal,
    ) -> Result<Goal> {
        let goal = sqlx::query_as::<_, Goal>(&format!(
            r#"
            UPDATE goals
            SET current_value = $3
            WHERE user_id = $1 AND goal_id = $2
            RETURNING {GOAL_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(goal_id)
        .bind(value)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(goal)
    }

    pub async fn set_completed(&self, user_id: &str, goal_id: Uuid, completed: bool) -> Result<Goal> {
        let goal = sqlx::query_as::<_, Goal>(&format!(
            r#"
            UPDATE goals
            SET completed = $3,
                completed_at = CASE WHEN $3 THEN CURRENT_TIMESTAMP ELSE NULL END
            WHERE user_id = $1 AND goal_id = $2
            RETURNING {GOAL_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(goal_id)
        .bind(completed)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(goal)
    }

    pub async fn delete(&self, user_id: &str, goal_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM goals WHERE user_id = $1 AND goal_id = $2")
            .bind(user_id)
            .bind(goal_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
