//! Domain module for the walks catalogue.
//!
//! Persistence forms of the three resources and their typed identifiers.

mod id;
pub mod region;
pub mod walk;
pub mod walk_difficulty;

pub use region::{Region, RegionDraft, RegionId};
pub use walk::{Walk, WalkDraft, WalkId};
pub use walk_difficulty::{WalkDifficulty, WalkDifficultyDraft, WalkDifficultyId};
