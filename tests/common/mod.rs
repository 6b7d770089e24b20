//! Common test helpers for integration tests.
//!
//! # Note
//!
//! Each integration test file compiles as its own crate, so helpers used by
//! only some of them would otherwise trigger dead code warnings.

#![allow(dead_code)]

use serde_json::{Value, json};
use uuid::Uuid;

use nz_walks_api::api::{AppState, RegionRequest, WalkDifficultyRequest, WalkRequest};
use nz_walks_api::domain::{Region, RegionDraft, WalkDifficulty, WalkDifficultyDraft};

// =============================================================================
// AppState Creation Helpers
// =============================================================================

/// Creates a test `AppState` backed by fresh in-memory repositories.
pub fn create_test_app_state() -> AppState {
    AppState::in_memory()
}

// =============================================================================
// Request Fixtures
// =============================================================================

pub fn wellington_request() -> RegionRequest {
    RegionRequest {
        code: Some("WGN".to_string()),
        name: Some("Wellington".to_string()),
        area: 100.0,
        lat: -41.3,
        long: 174.8,
        population: 200_000,
    }
}

pub fn wellington_json() -> Value {
    json!({
        "code": "WGN",
        "name": "Wellington",
        "area": 100,
        "lat": -41.3,
        "long": 174.8,
        "population": 200_000,
    })
}

pub fn walk_difficulty_request(code: &str) -> WalkDifficultyRequest {
    WalkDifficultyRequest {
        code: Some(code.to_string()),
    }
}

pub fn walk_request(
    name: &str,
    length: f64,
    region_id: Uuid,
    walk_difficulty_id: Uuid,
) -> WalkRequest {
    WalkRequest {
        name: Some(name.to_string()),
        length,
        region_id,
        walk_difficulty_id,
    }
}

// =============================================================================
// Seeding Helpers
// =============================================================================

/// Inserts a region directly through the repository.
pub async fn seed_region(state: &AppState, code: &str) -> Region {
    state
        .region_repository
        .add(RegionDraft {
            code: code.to_string(),
            name: format!("Region {code}"),
            area: 250.0,
            lat: -40.0,
            long: 175.0,
            population: 10_000,
        })
        .await
        .expect("Failed to seed region")
}

/// Inserts a walk difficulty directly through the repository.
pub async fn seed_walk_difficulty(state: &AppState, code: &str) -> WalkDifficulty {
    state
        .walk_difficulty_repository
        .add(WalkDifficultyDraft {
            code: code.to_string(),
        })
        .await
        .expect("Failed to seed walk difficulty")
}
