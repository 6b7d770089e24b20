//! Shared handler state and the health endpoint.

use std::sync::Arc;

use axum::Json;

use super::validation::WalkValidator;
use crate::infrastructure::{
    RegionRepository, Repositories, WalkDifficultyRepository, WalkRepository,
};

// =============================================================================
// Application State
// =============================================================================

/// Shared application dependencies.
///
/// Repositories are trait objects so the backend can be chosen at runtime
/// by `RepositoryFactory`. The walk validator is built from the same
/// region and walk difficulty repositories the handlers use.
#[derive(Clone)]
pub struct AppState {
    pub region_repository: Arc<dyn RegionRepository>,
    pub walk_difficulty_repository: Arc<dyn WalkDifficultyRepository>,
    pub walk_repository: Arc<dyn WalkRepository>,
    pub walk_validator: WalkValidator,
}

impl AppState {
    /// Creates a new `AppState` from initialized repositories.
    #[must_use]
    pub fn from_repositories(repositories: Repositories) -> Self {
        let walk_validator = WalkValidator::new(
            Arc::clone(&repositories.region_repository),
            Arc::clone(&repositories.walk_difficulty_repository),
        );
        Self {
            region_repository: repositories.region_repository,
            walk_difficulty_repository: repositories.walk_difficulty_repository,
            walk_repository: repositories.walk_repository,
            walk_validator,
        }
    }

    /// State backed by fresh in-memory repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repositories(Repositories::in_memory())
    }
}

// =============================================================================
// GET /health Handler
// =============================================================================

/// Health check response body.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint for load balancers and orchestrators.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
