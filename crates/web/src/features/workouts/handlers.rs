use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::workout::{
        CreateWorkoutRequest, TotalsRequest, TotalsResponse, WorkoutResponse,
        WorkoutSummaryResponse, workout_summaries,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/workouts",
    responses(
        (status = 200, description = "Workouts of the current user, newest first", body = Vec<WorkoutSummaryResponse>),
        (status = 401, description = "Missing or invalid API key")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn list_workouts(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let book = services::list_workouts(db.pool(), &user.user_id).await?;

    Ok(Json(workout_summaries(&book)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/{workout_id}",
    params(
        ("workout_id" = Uuid, Path, description = "Workout ID")
    ),
    responses(
        (status = 200, description = "Workout with totals", body = WorkoutResponse),
        (status = 404, description = "Workout not found")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn get_workout(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Path(workout_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let workout = services::get_workout(db.pool(), &user.user_id, workout_id).await?;

    Ok(Json(WorkoutResponse::from(workout)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout saved; the user's workouts with it first", body = Vec<WorkoutSummaryResponse>),
        (status = 400, description = "Missing title or exercises")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateWorkoutRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let book = services::create_workout(db.pool(), &user.user_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(workout_summaries(&book))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts/{workout_id}/complete",
    params(
        ("workout_id" = Uuid, Path, description = "Workout ID")
    ),
    responses(
        (status = 200, description = "Workout marked completed", body = Vec<WorkoutSummaryResponse>),
        (status = 404, description = "Workout not found")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn complete_workout(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Path(workout_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let book = services::set_completed(db.pool(), &user.user_id, workout_id, true).await?;

    Ok(Json(workout_summaries(&book)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts/{workout_id}/reopen",
    params(
        ("workout_id" = Uuid, Path, description = "Workout ID")
    ),
    responses(
        (status = 200, description = "Workout completion undone", body = Vec<WorkoutSummaryResponse>),
        (status = 404, description = "Workout not found")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn reopen_workout(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Path(workout_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let book = services::set_completed(db.pool(), &user.user_id, workout_id, false).await?;

    Ok(Json(workout_summaries(&book)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{workout_id}",
    params(
        ("workout_id" = Uuid, Path, description = "Workout ID")
    ),
    responses(
        (status = 200, description = "Workout deleted; the remaining workouts", body = Vec<WorkoutSummaryResponse>),
        (status = 404, description = "Workout not found")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Path(workout_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let book = services::delete_workout(db.pool(), &user.user_id, workout_id).await?;

    Ok(Json(workout_summaries(&book)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts/totals",
    request_body = TotalsRequest,
    responses(
        (status = 200, description = "Totals for the given exercises", body = TotalsResponse)
    ),
    tag = "workouts"
)]
pub async fn preview_totals(Json(payload): Json<TotalsRequest>) -> Result<Response, WebError> {
    Ok(Json(services::preview_totals(&payload)).into_response())
}
