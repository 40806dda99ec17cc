//! ToolTrack Server - Workshop Tool Lending Tracker
//!
//! REST API server over an in-memory lending transaction engine.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tooltrack_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("tooltrack_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ToolTrack Server v{}", env!("CARGO_PKG_VERSION"));

    // State is process-local; nothing survives a restart.
    let repository = if config.server.seed_demo {
        tracing::info!("Loading demo fixtures");
        Repository::with_demo_data()
    } else {
        Repository::new()
    };

    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Tools (inventory)
        .route("/tools", get(api::tools::list_tools))
        .route("/tools", post(api::tools::create_tool))
        .route("/tools/:id", get(api::tools::get_tool))
        .route("/tools/:id", put(api::tools::update_tool))
        .route("/tools/:id", delete(api::tools::delete_tool))
        // Transactions (ledger)
        .route("/transactions", get(api::transactions::list_transactions))
        .route("/transactions", post(api::transactions::create_transaction))
        .route("/transactions/:id", get(api::transactions::get_transaction))
        .route(
            "/transactions/:id/complete",
            post(api::transactions::complete_transaction),
        )
        .route("/transactions/:id/return", post(api::transactions::return_tool))
        .route(
            "/transactions/:id/turnover",
            post(api::transactions::turn_over_tool),
        )
        .route("/transactions/:id/code", get(api::transactions::transaction_code))
        // Instructors
        .route("/instructors", get(api::instructors::list_instructors))
        .route("/instructors", post(api::instructors::create_instructor))
        .route("/instructors/:id", get(api::instructors::get_instructor))
        .route(
            "/instructors/:id/shift-time",
            put(api::instructors::update_shift_time),
        )
        .route("/instructors/:id/returned", get(api::instructors::list_returned))
        .route(
            "/instructors/:id/turnover-all",
            post(api::instructors::turn_over_all),
        )
        // Borrowers
        .route("/borrowers", get(api::borrowers::list_borrowers))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
