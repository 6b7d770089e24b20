//! API module for HTTP handlers.
//!
//! This module contains route definitions, request/response handlers,
//! validation and the persistence ⇄ transport mapping.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod mapping;
pub mod regions;
pub mod router;
pub mod validation;
pub mod walk_difficulties;
pub mod walks;

pub use dto::{
    RegionDto, RegionRequest, WalkDifficultyDto, WalkDifficultyRequest, WalkDto, WalkRequest,
};
pub use error::{ApiError, ApiErrorResponse, ErrorBody};
pub use extract::IdPath;
pub use handlers::{AppState, HealthResponse, health_check};
pub use router::build_router;
pub use validation::{
    Validation, ValidationErrors, WalkValidator, validate_region, validate_walk_difficulty,
};
