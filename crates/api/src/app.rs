use anyhow::Context;
use axum::{middleware, routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::models::collection::movies_collection;
use shared::jwt::JwtKeys;

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{health, movies, roles};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub jwt: Arc<JwtKeys>,
}

/// Assembles the application: state, middleware, and the route table.
///
/// This is the one-time registration point — the movie routes, view
/// registry, and role grants wired here live for the process lifetime.
pub fn create_app(config: Config, pool: PgPool) -> anyhow::Result<Router> {
    let config = Arc::new(config);

    let jwt = JwtKeys::from_public_pem(&config.jwt.public_key, config.jwt.leeway_secs)
        .context("Invalid JWT public key")?;

    let state = AppState {
        pool,
        config: config.clone(),
        jwt: Arc::new(jwt),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let collection = movies_collection();
    tracing::info!(
        collection = collection.collection_name,
        type_name = collection.type_name,
        views = ?collection.views,
        "Registering collection"
    );

    // Movie collection routes (v1). Reads are public; mutation handlers
    // authenticate via the UserAuth extractor and check role grants.
    let movie_routes = Router::new()
        .route(
            "/api/v1/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route(
            "/api/v1/movies/:movie_id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        );

    // Role registry routes (v1)
    let role_routes = Router::new().route("/api/v1/roles", get(roles::list_roles));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    let app = Router::new()
        .merge(public_routes)
        .merge(movie_routes)
        .merge(role_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
