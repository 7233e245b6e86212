use sqlx::PgPool;
use storage::{
    books::WorkoutBook,
    dto::workout::{CreateWorkoutRequest, TotalsRequest, TotalsResponse},
    error::Result,
    models::Workout,
    repository::workout::WorkoutRepository,
    services::totals::compute_totals,
};
use uuid::Uuid;

async fn load_book(repo: &WorkoutRepository<'_>, user_id: &str) -> Result<WorkoutBook> {
    Ok(WorkoutBook::from_store(repo.list(user_id).await?))
}

/// A user's workouts, newest first
pub async fn list_workouts(pool: &PgPool, user_id: &str) -> Result<WorkoutBook> {
    let repo = WorkoutRepository::new(pool);
    load_book(&repo, user_id).await
}

pub async fn get_workout(pool: &PgPool, user_id: &str, workout_id: Uuid) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    repo.find_by_id(user_id, workout_id).await
}

/// Save a workout with a snapshot of its totals and return the workouts with
/// it at the front
pub async fn create_workout(
    pool: &PgPool,
    user_id: &str,
    request: &CreateWorkoutRequest,
) -> Result<WorkoutBook> {
    let totals = compute_totals(&request.exercises);

    let repo = WorkoutRepository::new(pool);
    let book = load_book(&repo, user_id).await?;
    let workout = repo.create(user_id, request, &totals).await?;

    tracing::info!(
        workout_id = %workout.workout_id,
        exercises = request.exercises.len(),
        volume = %totals.volume,
        "Workout saved"
    );
    Ok(book.add_or_update(workout))
}

/// Mark a workout completed, or undo it when `completed` is false
pub async fn set_completed(
    pool: &PgPool,
    user_id: &str,
    workout_id: Uuid,
    completed: bool,
) -> Result<WorkoutBook> {
    let repo = WorkoutRepository::new(pool);
    let book = load_book(&repo, user_id).await?;
    let workout = repo.set_completed(user_id, workout_id, completed).await?;

    tracing::info!(workout_id = %workout.workout_id, completed, "Workout completion changed");
    Ok(book.add_or_update(workout))
}

pub async fn delete_workout(pool: &PgPool, user_id: &str, workout_id: Uuid) -> Result<WorkoutBook> {
    let repo = WorkoutRepository::new(pool);
    let book = load_book(&repo, user_id).await?;
    repo.delete(user_id, workout_id).await?;

    Ok(book.remove(workout_id))
}

/// Totals for exercises that have not been saved yet
pub fn preview_totals(request: &TotalsRequest) -> TotalsResponse {
    TotalsResponse::from(request)
}
