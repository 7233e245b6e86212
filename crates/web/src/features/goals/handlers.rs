use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::goal::{
        AdjustGoalRequest, CreateGoalRequest, GoalListResponse, GoalResponse,
        SetCurrentValueRequest, UpdateGoalRequest, validate_measurement,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/goals",
    responses(
        (status = 200, description = "Goals of the current user, newest first", body = GoalListResponse),
        (status = 401, description = "Missing or invalid API key")
    ),
    security(("bearer_auth" = [])),
    tag = "goals"
)]
pub async fn list_goals(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    let book = services::list_goals(db.pool(), &user.user_id).await?;

    Ok(Json(GoalListResponse::from(&book)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/goals/{goal_id}",
    params(
        ("goal_id" = Uuid, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal found", body = GoalResponse),
        (status = 404, description = "Goal not found")
    ),
    security(("bearer_auth" = [])),
    tag = "goals"
)]
pub async fn get_goal(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let goal = services::get_goal(db.pool(), &user.user_id, goal_id).await?;

    Ok(Json(GoalResponse::from(goal)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/goals",
    request_body = CreateGoalRequest,
    responses(
        (status = 201, description = "Goal created; the user's goals with it first", body = GoalListResponse),
        (status = 400, description = "Invalid request")
    ),
    security(("bearer_auth" = [])),
    tag = "goals"
)]
pub async fn create_goal(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateGoalRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let book = services::create_goal(db.pool(), &user.user_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(GoalListResponse::from(&book))).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/goals/{goal_id}",
    params(
        ("goal_id" = Uuid, Path, description = "Goal ID")
    ),
    request_body = UpdateGoalRequest,
    responses(
        (status = 200, description = "Goal updated; the user's goals with it first", body = GoalListResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Goal not found")
    ),
    security(("bearer_auth" = [])),
    tag = "goals"
)]
pub async fn update_goal(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
    Json(payload): Json<UpdateGoalRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let book = services::update_goal(db.pool(), &user.user_id, goal_id, &payload).await?;

    Ok(Json(GoalListResponse::from(&book)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/goals/{goal_id}/adjust",
    params(
        ("goal_id" = Uuid, Path, description = "Goal ID")
    ),
    request_body = AdjustGoalRequest,
    responses(
        (status = 200, description = "Current value adjusted", body = GoalListResponse),
        (status = 400, description = "Delta out of range"),
        (status = 404, description = "Goal not found")
    ),
    security(("bearer_auth" = [])),
    tag = "goals"
)]
pub async fn adjust_goal(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
    Json(payload): Json<AdjustGoalRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let book = services::adjust_goal(db.pool(), &user.user_id, goal_id, payload.delta).await?;

    Ok(Json(GoalListResponse::from(&book)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/goals/{goal_id}/current",
    params(
        ("goal_id" = Uuid, Path, description = "Goal ID")
    ),
    request_body = SetCurrentValueRequest,
    responses(
        (status = 200, description = "Current value replaced", body = GoalListResponse),
        (status = 400, description = "No value given, or value out of range"),
        (status = 404, description = "Goal not found")
    ),
    security(("bearer_auth" = [])),
    tag = "goals"
)]
pub async fn set_current_value(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
    Json(payload): Json<SetCurrentValueRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let value = payload.resolve().ok_or_else(|| {
        WebError::BadRequest("Either value or minutes/seconds is required".to_string())
    })?;
    validate_measurement(&value).map_err(|e| {
        WebError::BadRequest(
            e.message
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string()),
        )
    })?;

    let book = services::set_current_value(db.pool(), &user.user_id, goal_id, value).await?;

    Ok(Json(GoalListResponse::from(&book)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/goals/{goal_id}/complete",
    params(
        ("goal_id" = Uuid, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal marked completed", body = GoalListResponse),
        (status = 404, description = "Goal not found")
    ),
    security(("bearer_auth" = [])),
    tag = "goals"
)]
pub async fn complete_goal(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let book = services::set_completed(db.pool(), &user.user_id, goal_id, true).await?;

    Ok(Json(GoalListResponse::from(&book)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/goals/{goal_id}/reopen",
    params(
        ("goal_id" = Uuid, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal completion undone", body = GoalListResponse),
        (status = 404, description = "Goal not found")
    ),
    security(("bearer_auth" = [])),
    tag = "goals"
)]
pub async fn reopen_goal(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let book = services::set_completed(db.pool(), &user.user_id, goal_id, false).await?;

    Ok(Json(GoalListResponse::from(&book)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/goals/{goal_id}",
    params(
        ("goal_id" = Uuid, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal deleted; the remaining goals", body = GoalListResponse),
        (status = 404, description = "Goal not found")
    ),
    security(("bearer_auth" = [])),
    tag = "goals"
)]
pub async fn delete_goal(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let book = services::delete_goal(db.pool(), &user.user_id, goal_id).await?;

    Ok(Json(GoalListResponse::from(&book)).into_response())
}
