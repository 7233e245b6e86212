use rust_decimal::Decimal;
use sqlx::PgPool;
use storage::{
    books::GoalBook,
    dto::goal::{CreateGoalRequest, UpdateGoalRequest},
    error::Result,
    models::Goal,
    repository::goal::GoalRepository,
};
use uuid::Uuid;

async fn load_book(repo: &GoalRepository<'_>, user_id: &str) -> Result<GoalBook> {
    Ok(GoalBook::from_store(repo.list(user_id).await?))
}

/// A user's goals, newest first
pub async fn list_goals(pool: &PgPool, user_id: &str) -> Result<GoalBook> {
    let repo = GoalRepository::new(pool);
    load_book(&repo, user_id).await
}

pub async fn get_goal(pool: &PgPool, user_id: &str, goal_id: Uuid) -> Result<Goal> {
    let repo = GoalRepository::new(pool);
    repo.find_by_id(user_id, goal_id).await
}

/// Create a goal and return the goals with it at the front
pub async fn create_goal(
    pool: &PgPool,
    user_id: &str,
    request: &CreateGoalRequest,
) -> Result<GoalBook> {
    let repo = GoalRepository::new(pool);
    let book = load_book(&repo, user_id).await?;
    let goal = repo.create(user_id, request).await?;

    tracing::info!(goal_id = %goal.goal_id, goal_type = %goal.goal_type, "Goal created");
    Ok(book.add_or_update(goal))
}

pub async fn update_goal(
    pool: &PgPool,
    user_id: &str,
    goal_id: Uuid,
    request: &UpdateGoalRequest,
) -> Result<GoalBook> {
    let repo = GoalRepository::new(pool);
    let book = load_book(&repo, user_id).await?;

    let existing = repo.find_by_id(user_id, goal_id).await?;
    let goal = repo.update(user_id, &existing, request).await?;

    Ok(book.add_or_update(goal))
}

/// Increment or decrement the current value
pub async fn adjust_goal(
    pool: &PgPool,
    user_id: &str,
    goal_id: Uuid,
    delta: Decimal,
) -> Result<GoalBook> {
    let repo = GoalRepository::new(pool);
    let book = load_book(&repo, user_id).await?;
    let goal = repo.adjust_current_value(user_id, goal_id, delta).await?;

    if goal.has_reached_target() && !goal.completed {
        tracing::info!(goal_id = %goal.goal_id, "Goal target reached");
    }

    Ok(book.add_or_update(goal))
}

pub async fn set_current_value(
    pool: &PgPool,
    user_id: &str,
    goal_id: Uuid,
    value: Decimal,
) -> Result<GoalBook> {
    let repo = GoalRepository::new(pool);
    let book = load_book(&repo, user_id).await?;
    let goal = repo.set_current_value(user_id, goal_id, value).await?;

    Ok(book.add_or_update(goal))
}

/// Mark a goal completed, or reopen it when `completed` is false
pub async fn set_completed(
    pool: &PgPool,
    user_id: &str,
    goal_id: Uuid,
    completed: bool,
) -> Result<GoalBook> {
    let repo = GoalRepository::new(pool);
    let book = load_book(&repo, user_id).await?;
    let goal = repo.set_completed(user_id, goal_id, completed).await?;

    tracing::info!(goal_id = %goal.goal_id, completed, "Goal completion changed");
    Ok(book.add_or_update(goal))
}

pub async fn delete_goal(pool: &PgPool, user_id: &str, goal_id: Uuid) -> Result<GoalBook> {
    let repo = GoalRepository::new(pool);
    let book = load_book(&repo, user_id).await?;
    repo.delete(user_id, goal_id).await?;

    Ok(book.remove(goal_id))
}
