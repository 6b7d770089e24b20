//! Walk handlers.
//!
//! Create and update resolve the referenced region and walk difficulty
//! through [`WalkValidator`](super::validation::WalkValidator) before
//! touching the walk repository. A failed reference check never mutates
//! the store.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
};

use super::dto::{WalkDto, WalkRequest};
use super::error::ApiErrorResponse;
use super::extract::IdPath;
use super::handlers::AppState;
use super::mapping::map_list;
use crate::domain::WalkId;

/// `201 Created` with a `Location` header pointing at the new walk.
pub type CreatedWalk = (StatusCode, [(header::HeaderName, String); 1], Json<WalkDto>);

/// Lists every walk.
///
/// # Errors
///
/// Returns 500 if the store fails.
pub async fn list_walks(
    State(state): State<AppState>,
) -> Result<Json<Vec<WalkDto>>, ApiErrorResponse> {
    let walks = state.walk_repository.get_all().await?;
    Ok(Json(map_list(walks)))
}

/// Fetches one walk.
///
/// # Errors
///
/// Returns 404 if no walk has the given ID.
pub async fn get_walk(
    State(state): State<AppState>,
    IdPath(id): IdPath<WalkId>,
) -> Result<Json<WalkDto>, ApiErrorResponse> {
    let walk = state.walk_repository.get(id).await?.ok_or_else(|| {
        tracing::debug!(walk_id = %id, "Walk not found");
        ApiErrorResponse::not_found()
    })?;
    Ok(Json(WalkDto::from(walk)))
}

/// Creates a walk.
///
/// # Request Body
///
/// ```json
/// { "name": "Mount Victoria", "length": 3.2, "regionId": "…", "walkDifficultyId": "…" }
/// ```
///
/// # Errors
///
/// Returns 400 listing every shape and reference violation.
pub async fn create_walk(
    State(state): State<AppState>,
    Json(request): Json<Option<WalkRequest>>,
) -> Result<CreatedWalk, ApiErrorResponse> {
    let draft = state.walk_validator.validate(request.as_ref()).await??;

    let walk = state.walk_repository.add(draft).await?;
    tracing::info!(walk_id = %walk.id, region_id = %walk.region_id, "Walk created");

    let location = format!("/walks/{}", walk.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(WalkDto::from(walk)),
    ))
}

/// Replaces the mutable fields of a walk after re-checking its references.
///
/// # Errors
///
/// Returns 400 if validation fails, 404 if the walk does not exist.
pub async fn update_walk(
    State(state): State<AppState>,
    IdPath(id): IdPath<WalkId>,
    Json(request): Json<Option<WalkRequest>>,
) -> Result<Json<WalkDto>, ApiErrorResponse> {
    let draft = state.walk_validator.validate(request.as_ref()).await??;

    let walk = state
        .walk_repository
        .update(id, draft)
        .await?
        .ok_or_else(|| {
            tracing::debug!(walk_id = %id, "Walk not found for update");
            ApiErrorResponse::not_found()
        })?;
    Ok(Json(WalkDto::from(walk)))
}

/// Deletes a walk and returns what it looked like.
///
/// # Errors
///
/// Returns 404 if the walk does not exist.
pub async fn delete_walk(
    State(state): State<AppState>,
    IdPath(id): IdPath<WalkId>,
) -> Result<Json<WalkDto>, ApiErrorResponse> {
    let walk = state
        .walk_repository
        .delete(id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(walk_id = %id, "Walk not found for delete");
            ApiErrorResponse::not_found()
        })?;
    tracing::info!(walk_id = %id, "Walk deleted");
    Ok(Json(WalkDto::from(walk)))
}
