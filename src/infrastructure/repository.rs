//! Repository traits for the three resources.
//!
//! Every method returns a boxed `Send` future so that the traits stay
//! object safe and can be shared as `Arc<dyn …>` across axum handlers.
//! A missing row is never an error: lookups, updates and deletes report it
//! as `Ok(None)`.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::domain::{
    Region, RegionDraft, RegionId, Walk, WalkDifficulty, WalkDifficultyDraft, WalkDifficultyId,
    WalkDraft, WalkId,
};

// =============================================================================
// Repository Error
// =============================================================================

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store rejected or failed the operation.
    #[error("Database error: {0}")]
    Database(String),

    /// A stored row could not be decoded into its domain form.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::Serialization(error.to_string())
            }
            other => Self::Database(other.to_string()),
        }
    }
}

/// Future returned by every repository operation.
pub type RepositoryFuture<T> = BoxFuture<'static, Result<T, RepositoryError>>;

// =============================================================================
// Region Repository
// =============================================================================

/// Repository trait for [`Region`] rows.
pub trait RegionRepository: Send + Sync {
    /// Returns every region. Order follows the store default.
    fn get_all(&self) -> RepositoryFuture<Vec<Region>>;

    /// Finds a region by its ID.
    fn get(&self, id: RegionId) -> RepositoryFuture<Option<Region>>;

    /// Assigns a fresh ID, inserts the row and returns it.
    fn add(&self, draft: RegionDraft) -> RepositoryFuture<Region>;

    /// Overwrites the mutable fields of an existing region.
    ///
    /// Returns `Ok(None)` when no region has the given ID.
    fn update(&self, id: RegionId, draft: RegionDraft) -> RepositoryFuture<Option<Region>>;

    /// Removes a region and returns its prior state.
    ///
    /// Walks that still reference the region are left untouched.
    fn delete(&self, id: RegionId) -> RepositoryFuture<Option<Region>>;
}

// =============================================================================
// Walk Difficulty Repository
// =============================================================================

/// Repository trait for [`WalkDifficulty`] rows.
///
/// Same contract as [`RegionRepository`].
pub trait WalkDifficultyRepository: Send + Sync {
    fn get_all(&self) -> RepositoryFuture<Vec<WalkDifficulty>>;

    fn get(&self, id: WalkDifficultyId) -> RepositoryFuture<Option<WalkDifficulty>>;

    fn add(&self, draft: WalkDifficultyDraft) -> RepositoryFuture<WalkDifficulty>;

    fn update(
        &self,
        id: WalkDifficultyId,
        draft: WalkDifficultyDraft,
    ) -> RepositoryFuture<Option<WalkDifficulty>>;

    fn delete(&self, id: WalkDifficultyId) -> RepositoryFuture<Option<WalkDifficulty>>;
}

// =============================================================================
// Walk Repository
// =============================================================================

/// Repository trait for [`Walk`] rows.
///
/// Referential integrity of `region_id` and `walk_difficulty_id` is checked
/// by the API layer before `add`/`update`; implementations store whatever
/// they are given.
pub trait WalkRepository: Send + Sync {
    fn get_all(&self) -> RepositoryFuture<Vec<Walk>>;

    fn get(&self, id: WalkId) -> RepositoryFuture<Option<Walk>>;

    fn add(&self, draft: WalkDraft) -> RepositoryFuture<Walk>;

    fn update(&self, id: WalkId, draft: WalkDraft) -> RepositoryFuture<Option<Walk>>;

    fn delete(&self, id: WalkId) -> RepositoryFuture<Option<Walk>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_repository_error_display() {
        let error = RepositoryError::Database("connection refused".to_string());
        assert_eq!(error.to_string(), "Database error: connection refused");

        let error = RepositoryError::Serialization("bad column".to_string());
        assert_eq!(error.to_string(), "Serialization error: bad column");
    }

    #[rstest]
    fn test_sqlx_row_not_found_maps_to_database_error() {
        let error = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(error, RepositoryError::Database(_)));
    }
}
