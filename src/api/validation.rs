//! Request validation.
//!
//! Validators check every rule and collect all violations into a
//! [`ValidationErrors`] mapping keyed by field name, instead of stopping at
//! the first one. The only short-circuit is a missing request body.
//!
//! On success a validator returns the domain draft built from the request,
//! so handlers never touch an unchecked request again.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use super::dto::{RegionRequest, WalkDifficultyRequest, WalkRequest};
use crate::domain::{RegionDraft, RegionId, WalkDifficultyDraft, WalkDifficultyId, WalkDraft};
use crate::infrastructure::{RegionRepository, RepositoryError, WalkDifficultyRepository};

// =============================================================================
// Validation Errors
// =============================================================================

/// Field name → messages. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

/// Outcome of validating a request: the checked value or every violation.
pub type Validation<T> = Result<T, ValidationErrors>;

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`. Repeated messages are kept once.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        let messages = self.0.entry(field.into()).or_default();
        if !messages.contains(&message) {
            messages.push(message);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Field names in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value)` if nothing was recorded, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one violation was recorded.
    pub fn into_result<T>(self, value: T) -> Validation<T> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    fn missing_request(resource: &str) -> Self {
        let mut errors = Self::new();
        errors.add(REQUEST_FIELD, format!("{resource} data is required."));
        errors
    }
}

// =============================================================================
// Field Rules
// =============================================================================

/// Key used when the whole request body is absent.
pub const REQUEST_FIELD: &str = "Request";

fn require_text(errors: &mut ValidationErrors, field: &str, value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => {
            errors.add(
                field,
                format!("{field} cannot be null or empty or white space."),
            );
            String::new()
        }
    }
}

// =============================================================================
// Region / Walk Difficulty
// =============================================================================

/// Validates a region create/update request.
///
/// # Errors
///
/// Returns every violated rule: blank `Code`/`Name`, `Area` not positive,
/// negative `Population`, or a missing body on its own.
pub fn validate_region(request: Option<&RegionRequest>) -> Validation<RegionDraft> {
    let Some(request) = request else {
        return Err(ValidationErrors::missing_request("Region"));
    };

    let mut errors = ValidationErrors::new();
    let code = require_text(&mut errors, "Code", request.code.as_deref());
    let name = require_text(&mut errors, "Name", request.name.as_deref());

    if request.area <= 0.0 {
        errors.add("Area", "Area cannot be less than or equal to zero.");
    }
    if request.population < 0 {
        errors.add("Population", "Population cannot be less than zero.");
    }

    errors.into_result(RegionDraft {
        code,
        name,
        area: request.area,
        lat: request.lat,
        long: request.long,
        population: request.population,
    })
}

/// Validates a walk difficulty create/update request.
///
/// # Errors
///
/// Returns a `Code` error when the code is blank, or the missing-body error.
pub fn validate_walk_difficulty(
    request: Option<&WalkDifficultyRequest>,
) -> Validation<WalkDifficultyDraft> {
    let Some(request) = request else {
        return Err(ValidationErrors::missing_request("Walk Difficulty"));
    };

    let mut errors = ValidationErrors::new();
    let code = require_text(&mut errors, "Code", request.code.as_deref());

    errors.into_result(WalkDifficultyDraft { code })
}

// =============================================================================
// Walk
// =============================================================================

/// Validates walk requests, including that the referenced region and walk
/// difficulty exist.
#[derive(Clone)]
pub struct WalkValidator {
    region_repository: Arc<dyn RegionRepository>,
    walk_difficulty_repository: Arc<dyn WalkDifficultyRepository>,
}

impl WalkValidator {
    #[must_use]
    pub fn new(
        region_repository: Arc<dyn RegionRepository>,
        walk_difficulty_repository: Arc<dyn WalkDifficultyRepository>,
    ) -> Self {
        Self {
            region_repository,
            walk_difficulty_repository,
        }
    }

    /// Validates a walk create/update request.
    ///
    /// Shape rules (`Name`, `Length`) and both reference lookups always run,
    /// so one response lists every problem.
    ///
    /// # Errors
    ///
    /// The outer error is a store failure during a reference lookup; the
    /// inner [`Validation`] carries the field errors.
    pub async fn validate(
        &self,
        request: Option<&WalkRequest>,
    ) -> Result<Validation<WalkDraft>, RepositoryError> {
        let Some(request) = request else {
            return Ok(Err(ValidationErrors::missing_request("Walk")));
        };

        let mut errors = ValidationErrors::new();
        let name = require_text(&mut errors, "Name", request.name.as_deref());

        if request.length <= 0.0 {
            errors.add("Length", "Length should be greater than zero.");
        }

        let region_id = RegionId::from_uuid(request.region_id);
        if self.region_repository.get(region_id).await?.is_none() {
            errors.add("RegionId", "RegionId is Invalid");
        }

        let walk_difficulty_id = WalkDifficultyId::from_uuid(request.walk_difficulty_id);
        if self
            .walk_difficulty_repository
            .get(walk_difficulty_id)
            .await?
            .is_none()
        {
            errors.add("WalkDifficultyId", "WalkDifficultyId is Invalid");
        }

        Ok(errors.into_result(WalkDraft {
            name,
            length: request.length,
            region_id,
            walk_difficulty_id,
        }))
    }
}

impl std::fmt::Debug for WalkValidator {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("WalkValidator")
            .field("region_repository", &"Arc<dyn RegionRepository>")
            .field(
                "walk_difficulty_repository",
                &"Arc<dyn WalkDifficultyRepository>",
            )
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
