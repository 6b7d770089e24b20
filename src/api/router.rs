//! Route table.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, health_check};
use super::regions::{create_region, delete_region, get_region, list_regions, update_region};
use super::walk_difficulties::{
    create_walk_difficulty, delete_walk_difficulty, get_walk_difficulty, list_walk_difficulties,
    update_walk_difficulty,
};
use super::walks::{create_walk, delete_walk, get_walk, list_walks, update_walk};

/// Builds the application router with tracing and permissive CORS.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        // Regions
        .route("/regions", get(list_regions).post(create_region))
        .route(
            "/regions/{id}",
            get(get_region).put(update_region).delete(delete_region),
        )
        // Walk difficulties
        .route(
            "/walkdifficulties",
            get(list_walk_difficulties).post(create_walk_difficulty),
        )
        .route(
            "/walkdifficulties/{id}",
            get(get_walk_difficulty)
                .put(update_walk_difficulty)
                .delete(delete_walk_difficulty),
        )
        // Walks
        .route("/walks", get(list_walks).post(create_walk))
        .route(
            "/walks/{id}",
            get(get_walk).put(update_walk).delete(delete_walk),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
