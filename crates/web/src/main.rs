use anyhow::Context;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;

use config::Config;
use features::{exercises, goals, progress, workouts};
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        goals::handlers::list_goals,
        goals::handlers::get_goal,
        goals::handlers::create_goal,
        goals::handlers::update_goal,
        goals::handlers::adjust_goal,
        goals::handlers::set_current_value,
        goals::handlers::complete_goal,
        goals::handlers::reopen_goal,
        goals::handlers::delete_goal,
        workouts::handlers::list_workouts,
        workouts::handlers::get_workout,
        workouts::handlers::create_workout,
        workouts::handlers::complete_workout,
        workouts::handlers::reopen_workout,
        workouts::handlers::delete_workout,
        workouts::handlers::preview_totals,
        exercises::handlers::search_exercises,
        progress::handlers::compute_progress_handler,
    ),
    components(
        schemas(
            storage::dto::goal::CreateGoalRequest,
            storage::dto::goal::UpdateGoalRequest,
            storage::dto::goal::AdjustGoalRequest,
            storage::dto::goal::SetCurrentValueRequest,
            storage::dto::goal::GoalResponse,
            storage::dto::goal::GoalListResponse,
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::TotalsRequest,
            storage::dto::workout::TotalsResponse,
            storage::dto::workout::WorkoutResponse,
            storage::dto::workout::WorkoutSummaryResponse,
            storage::dto::progress::ComputeProgressRequest,
            storage::dto::progress::ComputeProgressResponse,
            storage::models::GoalType,
            storage::models::Exercise,
            storage::models::WorkoutSet,
            storage::models::SetType,
            storage::models::CatalogExercise,
        )
    ),
    tags(
        (name = "goals", description = "Goal tracking endpoints"),
        (name = "workouts", description = "Workout logging endpoints"),
        (name = "exercises", description = "Public exercise catalog"),
        (name = "progress", description = "Public progress calculator"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting workout tracker API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("No API keys configured, every authenticated route will return 401");
    } else {
        tracing::info!("Loaded {} API key(s)", api_keys.len());
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    let app = routes::api_router(db, api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
