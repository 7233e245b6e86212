use axum::{
    Json,
    extract::Query,
    response::{IntoResponse, Response},
};
use storage::{dto::exercise::CatalogSearchParams, models::CatalogExercise};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/exercises",
    params(CatalogSearchParams),
    responses(
        (status = 200, description = "Matching catalog exercises", body = Vec<CatalogExercise>)
    ),
    tag = "exercises"
)]
pub async fn search_exercises(
    Query(params): Query<CatalogSearchParams>,
) -> Result<Response, WebError> {
    Ok(Json(services::search_exercises(&params)).into_response())
}
