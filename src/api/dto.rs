//! Data Transfer Objects for API requests and responses.
//!
//! Transport forms mirror the domain entities field for field; JSON keys
//! are camelCase (`lat`, `long`, `regionId`, `walkDifficultyId`).
//!
//! Request bodies default every missing field (absent string, zero, nil
//! id) so that incomplete input surfaces as field-level validation errors
//! rather than a deserialization rejection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{RegionId, WalkDifficultyId, WalkId};

// =============================================================================
// Region DTOs
// =============================================================================

/// Transport form of a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: RegionId,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Request body for creating or updating a region.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

// =============================================================================
// Walk Difficulty DTOs
// =============================================================================

/// Transport form of a walk difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDifficultyDto {
    pub id: WalkDifficultyId,
    pub code: String,
}

/// Request body for creating or updating a walk difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalkDifficultyRequest {
    pub code: Option<String>,
}

// =============================================================================
// Walk DTOs
// =============================================================================

/// Transport form of a walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDto {
    pub id: WalkId,
    pub name: String,
    pub length: f64,
    pub region_id: RegionId,
    pub walk_difficulty_id: WalkDifficultyId,
}

/// Request body for creating or updating a walk.
///
/// Reference ids are plain UUIDs here; they only become typed ids once
/// they have been resolved against their repositories.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalkRequest {
    pub name: Option<String>,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_region_dto_serializes_camel_case() {
        let id = RegionId::generate();
        let dto = RegionDto {
            id,
            code: "WGN".to_string(),
            name: "Wellington".to_string(),
            area: 100.0,
            lat: -41.3,
            long: 174.8,
            population: 200_000,
        };

        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(
            value,
            json!({
                "id": id.to_string(),
                "code": "WGN",
                "name": "Wellington",
                "area": 100.0,
                "lat": -41.3,
                "long": 174.8,
                "population": 200_000,
            })
        );
    }

    #[rstest]
    fn test_walk_dto_uses_reference_keys() {
        let dto = WalkDto {
            id: WalkId::generate(),
            name: "Kepler Track".to_string(),
            length: 60.0,
            region_id: RegionId::generate(),
            walk_difficulty_id: WalkDifficultyId::generate(),
        };

        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["regionId"], json!(dto.region_id.to_string()));
        assert_eq!(value["walkDifficultyId"], json!(dto.walk_difficulty_id.to_string()));
    }

    #[rstest]
    fn test_region_request_defaults_missing_fields() {
        let request: RegionRequest = serde_json::from_value(json!({ "name": "Otago" })).unwrap();

        assert_eq!(request.code, None);
        assert_eq!(request.name.as_deref(), Some("Otago"));
        assert!(request.area.abs() < f64::EPSILON);
        assert_eq!(request.population, 0);
    }

    #[rstest]
    fn test_walk_request_defaults_ids_to_nil() {
        let request: WalkRequest = serde_json::from_value(json!({ "length": 3.5 })).unwrap();

        assert!(request.region_id.is_nil());
        assert!(request.walk_difficulty_id.is_nil());
    }
}
