//! In-memory repository implementations.
//!
//! Suitable for development and tests. Rows live in a
//! `HashMap` behind a `tokio::sync::RwLock`; each operation takes the lock
//! for its own duration only, so concurrent updates to one row resolve as
//! last write wins.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::RwLock;

use crate::domain::{
    Region, RegionDraft, RegionId, Walk, WalkDifficulty, WalkDifficultyDraft, WalkDifficultyId,
    WalkDraft, WalkId,
};
use crate::infrastructure::{
    RegionRepository, RepositoryFuture, WalkDifficultyRepository, WalkRepository,
};

// =============================================================================
// Shared Table
// =============================================================================

/// A keyed collection of rows shared between clones of a repository.
#[derive(Debug)]
struct Table<K, V> {
    rows: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Clone for Table<K, V> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<K, V> Table<K, V>
where
    K: Copy + Eq + Hash + Ord + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Lists rows ordered by key. Keys are time-ordered UUIDs, which gives
    /// creation order.
    fn all(&self) -> RepositoryFuture<Vec<V>> {
        let rows = Arc::clone(&self.rows);
        async move {
            let guard = rows.read().await;
            let mut entries: Vec<(&K, &V)> = guard.iter().collect();
            entries.sort_by_key(|(key, _)| **key);
            Ok(entries.into_iter().map(|(_, row)| row.clone()).collect())
        }
        .boxed()
    }

    fn find(&self, key: K) -> RepositoryFuture<Option<V>> {
        let rows = Arc::clone(&self.rows);
        async move { Ok(rows.read().await.get(&key).cloned()) }.boxed()
    }

    fn insert(&self, key: K, row: V) -> RepositoryFuture<V> {
        let rows = Arc::clone(&self.rows);
        async move {
            rows.write().await.insert(key, row.clone());
            Ok(row)
        }
        .boxed()
    }

    /// Applies `change` to the row under `key`, if any, and returns the result.
    fn modify<F>(&self, key: K, change: F) -> RepositoryFuture<Option<V>>
    where
        F: FnOnce(&mut V) + Send + 'static,
    {
        let rows = Arc::clone(&self.rows);
        async move {
            let mut guard = rows.write().await;
            Ok(guard.get_mut(&key).map(|row| {
                change(row);
                row.clone()
            }))
        }
        .boxed()
    }

    fn remove(&self, key: K) -> RepositoryFuture<Option<V>> {
        let rows = Arc::clone(&self.rows);
        async move { Ok(rows.write().await.remove(&key)) }.boxed()
    }
}

// =============================================================================
// In-Memory Region Repository
// =============================================================================

/// In-memory implementation of [`RegionRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegionRepository {
    regions: Table<RegionId, Region>,
}

impl InMemoryRegionRepository {
    /// Creates a new empty in-memory region repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegionRepository for InMemoryRegionRepository {
    fn get_all(&self) -> RepositoryFuture<Vec<Region>> {
        self.regions.all()
    }

    fn get(&self, id: RegionId) -> RepositoryFuture<Option<Region>> {
        self.regions.find(id)
    }

    fn add(&self, draft: RegionDraft) -> RepositoryFuture<Region> {
        let id = RegionId::generate();
        tracing::debug!(region_id = %id, "Inserting region");
        self.regions.insert(id, Region::from_draft(id, draft))
    }

    fn update(&self, id: RegionId, draft: RegionDraft) -> RepositoryFuture<Option<Region>> {
        self.regions.modify(id, move |region| region.apply(draft))
    }

    fn delete(&self, id: RegionId) -> RepositoryFuture<Option<Region>> {
        self.regions.remove(id)
    }
}

// =============================================================================
// In-Memory Walk Difficulty Repository
// =============================================================================

/// In-memory implementation of [`WalkDifficultyRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryWalkDifficultyRepository {
    walk_difficulties: Table<WalkDifficultyId, WalkDifficulty>,
}

impl InMemoryWalkDifficultyRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WalkDifficultyRepository for InMemoryWalkDifficultyRepository {
    fn get_all(&self) -> RepositoryFuture<Vec<WalkDifficulty>> {
        self.walk_difficulties.all()
    }

    fn get(&self, id: WalkDifficultyId) -> RepositoryFuture<Option<WalkDifficulty>> {
        self.walk_difficulties.find(id)
    }

    fn add(&self, draft: WalkDifficultyDraft) -> RepositoryFuture<WalkDifficulty> {
        let id = WalkDifficultyId::generate();
        tracing::debug!(walk_difficulty_id = %id, "Inserting walk difficulty");
        self.walk_difficulties
            .insert(id, WalkDifficulty::from_draft(id, draft))
    }

    fn update(
        &self,
        id: WalkDifficultyId,
        draft: WalkDifficultyDraft,
    ) -> RepositoryFuture<Option<WalkDifficulty>> {
        self.walk_difficulties
            .modify(id, move |walk_difficulty| walk_difficulty.apply(draft))
    }

    fn delete(&self, id: WalkDifficultyId) -> RepositoryFuture<Option<WalkDifficulty>> {
        self.walk_difficulties.remove(id)
    }
}

// =============================================================================
// In-Memory Walk Repository
// =============================================================================

/// In-memory implementation of [`WalkRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryWalkRepository {
    walks: Table<WalkId, Walk>,
}

impl InMemoryWalkRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WalkRepository for InMemoryWalkRepository {
    fn get_all(&self) -> RepositoryFuture<Vec<Walk>> {
        self.walks.all()
    }

    fn get(&self, id: WalkId) -> RepositoryFuture<Option<Walk>> {
        self.walks.find(id)
    }

    fn add(&self, draft: WalkDraft) -> RepositoryFuture<Walk> {
        let id = WalkId::generate();
        tracing::debug!(walk_id = %id, "Inserting walk");
        self.walks.insert(id, Walk::from_draft(id, draft))
    }

    fn update(&self, id: WalkId, draft: WalkDraft) -> RepositoryFuture<Option<Walk>> {
        self.walks.modify(id, move |walk| walk.apply(draft))
    }

    fn delete(&self, id: WalkId) -> RepositoryFuture<Option<Walk>> {
        self.walks.remove(id)
    }
}

// =============================================================================
// Tests
// =============================================================================
