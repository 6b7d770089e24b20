//! Walk difficulty domain model.

use super::id::entity_id;

entity_id! {
    /// Unique identifier for a walk difficulty.
    WalkDifficultyId
}

/// A difficulty grade (e.g. `Easy`, `Medium`, `Hard`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkDifficulty {
    pub id: WalkDifficultyId,
    pub code: String,
}

/// The mutable fields of a walk difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkDifficultyDraft {
    pub code: String,
}

impl WalkDifficulty {
    #[must_use]
    pub fn from_draft(id: WalkDifficultyId, draft: WalkDifficultyDraft) -> Self {
        Self {
            id,
            code: draft.code,
        }
    }

    pub fn apply(&mut self, draft: WalkDifficultyDraft) {
        self.code = draft.code;
    }
}
