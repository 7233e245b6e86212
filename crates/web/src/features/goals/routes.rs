use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{
    adjust_goal, complete_goal, create_goal, delete_goal, get_goal, list_goals, reopen_goal,
    set_current_value, update_goal,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_goals).post(create_goal))
        .route(
            "/:goal_id",
            get(get_goal).patch(update_goal).delete(delete_goal),
        )
        .route("/:goal_id/adjust", post(adjust_goal))
        .route("/:goal_id/current", put(set_current_value))
        .route("/:goal_id/complete", post(complete_goal))
        .route("/:goal_id/reopen", post(reopen_goal))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
