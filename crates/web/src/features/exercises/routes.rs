use axum::{Router, routing::get};
use storage::Database;

use super::handlers::search_exercises;

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(search_exercises))
}
