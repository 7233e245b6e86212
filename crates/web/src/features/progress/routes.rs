use axum::{Router, routing::post};
use storage::Database;

use super::handlers::compute_progress_handler;

pub fn routes() -> Router<Database> {
    Router::new().route("/compute", post(compute_progress_handler))
}
