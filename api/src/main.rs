//! HRM API Server
//!
//! An employee record-management service: CRUD over HTTP, backed by
//! PostgreSQL. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post, put},
    Json, Router,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresEmployeeRepository;
use app::EmployeeService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<EmployeeService<PostgresEmployeeRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hrm_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HRM API...");

    let config = Config::from_env();

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("failed to run migrations")?;
    tracing::info!("Database ready");

    // Create adapter and application service
    let employee_repo = Arc::new(PostgresEmployeeRepository::new(db.clone()));
    let employee_service = Arc::new(EmployeeService::new(employee_repo));

    let state = AppState { employee_service };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("failed to build governor config")?,
    );

    // Mutating routes are rate limited; reads are not
    let rate_limited_routes = Router::new()
        .route("/employees", post(handlers::create_employee))
        .route(
            "/employees/:id",
            put(handlers::update_employee).delete(handlers::delete_employee),
        )
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .route("/employees", get(handlers::list_employees))
        .route("/employees/:id", get(handlers::get_employee))
        .route(
            "/employees/employee-id/:employee_id",
            get(handlers::get_employee_by_employee_id),
        )
        .merge(rate_limited_routes)
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("HTTP server error")?;

    Ok(())
}
