//! Walk difficulty handlers.
//!
//! - `GET /walkdifficulties`
//! - `GET /walkdifficulties/{id}`
//! - `POST /walkdifficulties`
//! - `PUT /walkdifficulties/{id}`
//! - `DELETE /walkdifficulties/{id}`

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
};

use super::dto::{WalkDifficultyDto, WalkDifficultyRequest};
use super::error::ApiErrorResponse;
use super::extract::IdPath;
use super::handlers::AppState;
use super::mapping::map_list;
use super::validation::validate_walk_difficulty;
use crate::domain::WalkDifficultyId;

/// `201 Created` with a `Location` header pointing at the new walk difficulty.
pub type CreatedWalkDifficulty = (
    StatusCode,
    [(header::HeaderName, String); 1],
    Json<WalkDifficultyDto>,
);

/// Lists every walk difficulty.
///
/// # Errors
///
/// Returns 500 if the store fails.
pub async fn list_walk_difficulties(
    State(state): State<AppState>,
) -> Result<Json<Vec<WalkDifficultyDto>>, ApiErrorResponse> {
    let walk_difficulties = state.walk_difficulty_repository.get_all().await?;
    Ok(Json(map_list(walk_difficulties)))
}

/// Fetches one walk difficulty.
///
/// # Errors
///
/// Returns 404 if no walk difficulty has the given ID.
pub async fn get_walk_difficulty(
    State(state): State<AppState>,
    IdPath(id): IdPath<WalkDifficultyId>,
) -> Result<Json<WalkDifficultyDto>, ApiErrorResponse> {
    let walk_difficulty = state
        .walk_difficulty_repository
        .get(id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(walk_difficulty_id = %id, "Walk difficulty not found");
            ApiErrorResponse::not_found()
        })?;
    Ok(Json(WalkDifficultyDto::from(walk_difficulty)))
}

/// Creates a walk difficulty.
///
/// # Request Body
///
/// ```json
/// { "code": "Easy" }
/// ```
///
/// # Errors
///
/// Returns 400 if the code is blank or the body is missing.
pub async fn create_walk_difficulty(
    State(state): State<AppState>,
    Json(request): Json<Option<WalkDifficultyRequest>>,
) -> Result<CreatedWalkDifficulty, ApiErrorResponse> {
    let draft = validate_walk_difficulty(request.as_ref())?;

    let walk_difficulty = state.walk_difficulty_repository.add(draft).await?;
    tracing::info!(walk_difficulty_id = %walk_difficulty.id, "Walk difficulty created");

    let location = format!("/walkdifficulties/{}", walk_difficulty.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(WalkDifficultyDto::from(walk_difficulty)),
    ))
}

/// Replaces the code of a walk difficulty.
///
/// # Errors
///
/// Returns 400 if validation fails, 404 if the walk difficulty does not exist.
pub async fn update_walk_difficulty(
    State(state): State<AppState>,
    IdPath(id): IdPath<WalkDifficultyId>,
    Json(request): Json<Option<WalkDifficultyRequest>>,
) -> Result<Json<WalkDifficultyDto>, ApiErrorResponse> {
    let draft = validate_walk_difficulty(request.as_ref())?;

    let walk_difficulty = state
        .walk_difficulty_repository
        .update(id, draft)
        .await?
        .ok_or_else(|| {
            tracing::debug!(walk_difficulty_id = %id, "Walk difficulty not found for update");
            ApiErrorResponse::not_found()
        })?;
    Ok(Json(WalkDifficultyDto::from(walk_difficulty)))
}

/// Deletes a walk difficulty and returns what it looked like.
///
/// Walks graded with this difficulty keep their reference.
///
/// # Errors
///
/// Returns 404 if the walk difficulty does not exist.
pub async fn delete_walk_difficulty(
    State(state): State<AppState>,
    IdPath(id): IdPath<WalkDifficultyId>,
) -> Result<Json<WalkDifficultyDto>, ApiErrorResponse> {
    let walk_difficulty = state
        .walk_difficulty_repository
        .delete(id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(walk_difficulty_id = %id, "Walk difficulty not found for delete");
            ApiErrorResponse::not_found()
        })?;
    tracing::info!(walk_difficulty_id = %id, "Walk difficulty deleted");
    Ok(Json(WalkDifficultyDto::from(walk_difficulty)))
}
