//! Integration tests for the region handlers.
//!
//! Handlers are called directly with their extractors against in-memory
//! repositories.

mod common;

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use rstest::rstest;

use common::{create_test_app_state, seed_region, wellington_request};
use nz_walks_api::api::{IdPath, RegionRequest};
use nz_walks_api::api::regions::{
    create_region, delete_region, get_region, list_regions, update_region,
};
use nz_walks_api::domain::RegionId;

// =============================================================================
// POST /regions
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_create_region_returns_created_with_location() {
    let state = create_test_app_state();

    let (status, [(header_name, location)], Json(created)) =
        create_region(State(state.clone()), Json(Some(wellington_request())))
            .await
            .expect("create should succeed");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(header_name, header::LOCATION);
    assert_eq!(location, format!("/regions/{}", created.id));
    assert_eq!(created.code, "WGN");
    assert_eq!(created.name, "Wellington");
    assert_eq!(created.population, 200_000);

    let Json(fetched) = get_region(State(state), IdPath(created.id))
        .await
        .expect("created region should be retrievable");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test]
async fn test_create_region_assigns_distinct_ids() {
    let state = create_test_app_state();

    let (_, _, Json(first)) = create_region(State(state.clone()), Json(Some(wellington_request())))
        .await
        .unwrap();
    let (_, _, Json(second)) = create_region(State(state), Json(Some(wellington_request())))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[rstest]
#[tokio::test]
async fn test_create_region_invalid_reports_every_field() {
    let state = create_test_app_state();
    let request = RegionRequest {
        code: Some(String::new()),
        name: Some("  ".to_string()),
        area: -3.0,
        population: -10,
        ..wellington_request()
    };

    let error = create_region(State(state.clone()), Json(Some(request)))
        .await
        .unwrap_err();

    assert_eq!(error.status, StatusCode::BAD_REQUEST);
    let errors = error.validation_errors().expect("validation body");
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec!["Area", "Code", "Name", "Population"]
    );

    let Json(regions) = list_regions(State(state)).await.unwrap();
    assert!(regions.is_empty(), "invalid request must not persist");
}

#[rstest]
#[tokio::test]
async fn test_create_region_without_body() {
    let state = create_test_app_state();

    let error = create_region(State(state), Json(None)).await.unwrap_err();

    assert_eq!(error.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error.validation_errors().unwrap().get("Request"),
        Some(&["Region data is required.".to_string()][..])
    );
}

// =============================================================================
// GET /regions
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_list_regions_empty() {
    let state = create_test_app_state();

    let Json(regions) = list_regions(State(state)).await.unwrap();

    assert!(regions.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_list_regions_returns_all() {
    let state = create_test_app_state();
    seed_region(&state, "AKL").await;
    seed_region(&state, "WGN").await;

    let Json(regions) = list_regions(State(state)).await.unwrap();

    let mut codes: Vec<&str> = regions.iter().map(|region| region.code.as_str()).collect();
    codes.sort_unstable();
    assert_eq!(codes, vec!["AKL", "WGN"]);
}

// =============================================================================
// GET / PUT / DELETE /regions/{id}
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_unknown_region_is_not_found_everywhere() {
    let state = create_test_app_state();
    let id = RegionId::generate();

    let get = get_region(State(state.clone()), IdPath(id)).await.unwrap_err();
    let update = update_region(State(state.clone()), IdPath(id), Json(Some(wellington_request())))
        .await
        .unwrap_err();
    let delete = delete_region(State(state), IdPath(id)).await.unwrap_err();

    assert_eq!(get.status, StatusCode::NOT_FOUND);
    assert_eq!(update.status, StatusCode::NOT_FOUND);
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn test_update_region_overwrites_fields() {
    let state = create_test_app_state();
    let region = seed_region(&state, "AKL").await;
    let request = RegionRequest {
        code: Some("NTL".to_string()),
        name: Some("Northland".to_string()),
        area: 13_789.0,
        lat: -35.4,
        long: 173.9,
        population: 194_600,
    };

    let Json(updated) = update_region(State(state.clone()), IdPath(region.id), Json(Some(request)))
        .await
        .unwrap();

    assert_eq!(updated.id, region.id);
    assert_eq!(updated.code, "NTL");
    assert_eq!(updated.population, 194_600);

    let Json(fetched) = get_region(State(state), IdPath(region.id)).await.unwrap();
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test]
async fn test_update_region_validation_runs_before_lookup() {
    let state = create_test_app_state();
    let request = RegionRequest {
        area: 0.0,
        ..wellington_request()
    };

    let error = update_region(State(state), IdPath(RegionId::generate()), Json(Some(request)))
        .await
        .unwrap_err();

    assert_eq!(error.status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn test_delete_region_twice() {
    let state = create_test_app_state();
    let region = seed_region(&state, "CAN").await;

    let Json(deleted) = delete_region(State(state.clone()), IdPath(region.id))
        .await
        .unwrap();
    let second = delete_region(State(state.clone()), IdPath(region.id))
        .await
        .unwrap_err();

    assert_eq!(deleted.id, region.id);
    assert_eq!(deleted.code, "CAN");
    assert_eq!(second.status, StatusCode::NOT_FOUND);
    assert_eq!(
        get_region(State(state), IdPath(region.id))
            .await
            .unwrap_err()
            .status,
        StatusCode::NOT_FOUND
    );
}
