use axum::{
    Json,
    response::{IntoResponse, Response},
};
use storage::{
    dto::progress::{ComputeProgressRequest, ComputeProgressResponse},
    services::progress::compute_progress,
};

use crate::error::WebError;

#[utoipa::path(
    post,
    path = "/api/progress/compute",
    request_body = ComputeProgressRequest,
    responses(
        (status = 200, description = "Progress percent between 0 and 100", body = ComputeProgressResponse)
    ),
    tag = "progress"
)]
pub async fn compute_progress_handler(
    Json(payload): Json<ComputeProgressRequest>,
) -> Result<Response, WebError> {
    let progress = compute_progress(
        payload.start_value,
        payload.current_value,
        payload.target_value,
    );

    Ok(Json(ComputeProgressResponse { progress }).into_response())
}
