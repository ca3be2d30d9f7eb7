//! SwapLink Backend Server
//!
//! HTTP server exposing the swap match engine, meetup selection and the
//! active-swap coordination store.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{routing::get, Json, Router};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

mod candidates;
mod config;
mod error;
mod geo;
mod handlers;
mod matching;
mod meetup;
mod middleware;
mod models;
mod routes;
mod state;
mod swaps;

use candidates::{CandidateRepository, InMemoryCandidateRepository};
use config::Config;
use matching::MatchEngine;
use meetup::MeetupSelector;
use middleware::RateLimiter;
use state::AppState;
use swaps::SwapCoordinator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    tracing::info!(environment = config.environment.as_str(), "Starting SwapLink");

    // Candidate pool
    let candidate_repo: Arc<dyn CandidateRepository> = if config.seed_demo_data {
        tracing::info!("Seeding demo candidate pool");
        Arc::new(InMemoryCandidateRepository::with_demo_data())
    } else {
        Arc::new(InMemoryCandidateRepository::new())
    };

    // Services
    let meetup_selector = Arc::new(MeetupSelector::default());
    let match_engine = Arc::new(MatchEngine::new(
        candidate_repo.clone(),
        meetup_selector.clone(),
    ));
    let swap_coordinator = Arc::new(SwapCoordinator::new());

    // Create shared app state
    let app_state = AppState::new(
        candidate_repo.clone(),
        match_engine,
        meetup_selector,
        swap_coordinator,
    );

    // Initialize rate limiter
    let rate_limiter = RateLimiter::new(config.rate_limit_rps);

    // Create the app router
    let health_repo = candidate_repo.clone();
    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(move || health_check(health_repo.clone())))
        .merge(routes::match_routes())
        .merge(routes::swap_routes())
        .merge(routes::candidate_routes())
        .with_state(app_state)
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(axum::middleware::from_fn(move |req, next| {
            let limiter = rate_limiter.clone();
            middleware::rate_limit_layer(limiter)(req, next)
        }))
        .layer(configure_cors(&config));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check at http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn root() -> &'static str {
    "SwapLink API Server"
}

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: String,
    candidate_pool_size: usize,
    version: String,
}

/// Health check endpoint
async fn health_check(repo: Arc<dyn CandidateRepository>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        candidate_pool_size: repo.count().await,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn configure_cors(config: &Config) -> CorsLayer {
    let allowed_origins_str = config.cors_allowed_origins.clone().unwrap_or_default();

    if allowed_origins_str.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins_str
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
