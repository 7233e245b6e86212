use axum::Router;
use storage::Database;

use crate::features::{exercises, goals, progress, workouts};
use crate::middleware::auth::ApiKeys;

/// All `/api` routes with the database attached.
pub fn api_router(db: Database, api_keys: ApiKeys) -> Router {
    Router::new()
        .nest("/api/goals", goals::routes::routes(api_keys.clone()))
        .nest("/api/workouts", workouts::routes::routes(api_keys))
        .nest("/api/exercises", exercises::routes::routes())
        .nest("/api/progress", progress::routes::routes())
        .with_state(db)
}
