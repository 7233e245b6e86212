use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    complete_workout, create_workout, delete_workout, get_workout, list_workouts,
    preview_totals, reopen_workout,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/:workout_id", get(get_workout).delete(delete_workout))
        .route("/:workout_id/complete", post(complete_workout))
        .route("/:workout_id/reopen", post(reopen_workout))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/totals", post(preview_totals))
        .merge(protected)
}
