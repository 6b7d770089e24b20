//! Walk domain model.
//!
//! A walk references its region and difficulty by identifier only. Nothing
//! prevents the referenced rows from being deleted later; such walks keep
//! their (now dangling) references.

use super::id::entity_id;
use super::{RegionId, WalkDifficultyId};

entity_id! {
    /// Unique identifier for a walk.
    WalkId
}

/// A walking track as stored in the `walks` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    pub id: WalkId,
    pub name: String,
    /// Length in kilometres.
    pub length: f64,
    pub region_id: RegionId,
    pub walk_difficulty_id: WalkDifficultyId,
}

/// The mutable fields of a walk.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkDraft {
    pub name: String,
    pub length: f64,
    pub region_id: RegionId,
    pub walk_difficulty_id: WalkDifficultyId,
}

impl Walk {
    #[must_use]
    pub fn from_draft(id: WalkId, draft: WalkDraft) -> Self {
        Self {
            id,
            name: draft.name,
            length: draft.length,
            region_id: draft.region_id,
            walk_difficulty_id: draft.walk_difficulty_id,
        }
    }

    pub fn apply(&mut self, draft: WalkDraft) {
        self.name = draft.name;
        self.length = draft.length;
        self.region_id = draft.region_id;
        self.walk_difficulty_id = draft.walk_difficulty_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_apply_replaces_references() {
        let id = WalkId::generate();
        let mut walk = Walk::from_draft(
            id,
            WalkDraft {
                name: "Mount Victoria Loop".to_string(),
                length: 5.2,
                region_id: RegionId::generate(),
                walk_difficulty_id: WalkDifficultyId::generate(),
            },
        );

        let region_id = RegionId::generate();
        let walk_difficulty_id = WalkDifficultyId::generate();
        walk.apply(WalkDraft {
            name: "Red Rocks".to_string(),
            length: 8.0,
            region_id,
            walk_difficulty_id,
        });

        assert_eq!(walk.id, id);
        assert_eq!(walk.name, "Red Rocks");
        assert_eq!(walk.region_id, region_id);
        assert_eq!(walk.walk_difficulty_id, walk_difficulty_id);
    }
}
