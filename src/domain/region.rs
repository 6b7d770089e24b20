//! Region domain model.

use super::id::entity_id;

entity_id! {
    /// Unique identifier for a region.
    RegionId
}

/// A geographic region as stored in the `regions` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: RegionId,
    /// Short code, e.g. `WGN`.
    pub code: String,
    pub name: String,
    /// Area in square kilometres.
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// The mutable fields of a region, used for Add and Update.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDraft {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl Region {
    /// Builds a persisted region from a draft and its assigned identifier.
    #[must_use]
    pub fn from_draft(id: RegionId, draft: RegionDraft) -> Self {
        Self {
            id,
            code: draft.code,
            name: draft.name,
            area: draft.area,
            lat: draft.lat,
            long: draft.long,
            population: draft.population,
        }
    }

    /// Overwrites every mutable field. The identifier is left untouched.
    pub fn apply(&mut self, draft: RegionDraft) {
        self.code = draft.code;
        self.name = draft.name;
        self.area = draft.area;
        self.lat = draft.lat;
        self.long = draft.long;
        self.population = draft.population;
    }
}
