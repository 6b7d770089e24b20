//! Region handlers.
//!
//! - `GET /regions`
//! - `GET /regions/{id}`
//! - `POST /regions`
//! - `PUT /regions/{id}`
//! - `DELETE /regions/{id}`

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
};

use super::dto::{RegionDto, RegionRequest};
use super::error::ApiErrorResponse;
use super::extract::IdPath;
use super::handlers::AppState;
use super::mapping::map_list;
use super::validation::validate_region;
use crate::domain::RegionId;

/// `201 Created` with a `Location` header pointing at the new region.
pub type CreatedRegion = (StatusCode, [(header::HeaderName, String); 1], Json<RegionDto>);

/// Lists every region.
///
/// # Errors
///
/// Returns 500 if the store fails.
pub async fn list_regions(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegionDto>>, ApiErrorResponse> {
    let regions = state.region_repository.get_all().await?;
    Ok(Json(map_list(regions)))
}

/// Fetches one region.
///
/// # Errors
///
/// Returns 404 if no region has the given ID.
pub async fn get_region(
    State(state): State<AppState>,
    IdPath(id): IdPath<RegionId>,
) -> Result<Json<RegionDto>, ApiErrorResponse> {
    let region = state.region_repository.get(id).await?.ok_or_else(|| {
        tracing::debug!(region_id = %id, "Region not found");
        ApiErrorResponse::not_found()
    })?;
    Ok(Json(RegionDto::from(region)))
}

/// Creates a region.
///
/// # Request Body
///
/// ```json
/// { "code": "WGN", "name": "Wellington", "area": 100, "lat": -41.3, "long": 174.8, "population": 200000 }
/// ```
///
/// # Errors
///
/// Returns 400 with the field errors if validation fails.
pub async fn create_region(
    State(state): State<AppState>,
    Json(request): Json<Option<RegionRequest>>,
) -> Result<CreatedRegion, ApiErrorResponse> {
    let draft = validate_region(request.as_ref())?;

    let region = state.region_repository.add(draft).await?;
    tracing::info!(region_id = %region.id, "Region created");

    let location = format!("/regions/{}", region.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(RegionDto::from(region)),
    ))
}

/// Replaces the mutable fields of a region.
///
/// # Errors
///
/// Returns 400 if validation fails, 404 if the region does not exist.
pub async fn update_region(
    State(state): State<AppState>,
    IdPath(id): IdPath<RegionId>,
    Json(request): Json<Option<RegionRequest>>,
) -> Result<Json<RegionDto>, ApiErrorResponse> {
    let draft = validate_region(request.as_ref())?;

    let region = state
        .region_repository
        .update(id, draft)
        .await?
        .ok_or_else(|| {
            tracing::debug!(region_id = %id, "Region not found for update");
            ApiErrorResponse::not_found()
        })?;
    Ok(Json(RegionDto::from(region)))
}

/// Deletes a region and returns what it looked like.
///
/// Walks referencing the region are not touched.
///
/// # Errors
///
/// Returns 404 if the region does not exist.
pub async fn delete_region(
    State(state): State<AppState>,
    IdPath(id): IdPath<RegionId>,
) -> Result<Json<RegionDto>, ApiErrorResponse> {
    let region = state.region_repository.delete(id).await?.ok_or_else(|| {
        tracing::debug!(region_id = %id, "Region not found for delete");
        ApiErrorResponse::not_found()
    })?;
    tracing::info!(region_id = %id, "Region deleted");
    Ok(Json(RegionDto::from(region)))
}
