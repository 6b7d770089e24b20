//! `PostgreSQL` repository implementations.
//!
//! Each operation is a single statement executed on a connection borrowed
//! from the `sqlx::PgPool` for the duration of that call. The pool returns
//! the connection on every exit path, including errors.
//!
//! # Table Schema
//!
//! Schema creation is handled by an external migration tool. The
//! repositories expect:
//!
//! ```sql
//! CREATE TABLE regions (
//!     id UUID PRIMARY KEY,
//!     code TEXT NOT NULL,
//!     name TEXT NOT NULL,
//!     area DOUBLE PRECISION NOT NULL,
//!     lat DOUBLE PRECISION NOT NULL,
//!     long DOUBLE PRECISION NOT NULL,
//!     population BIGINT NOT NULL
//! );
//!
//! CREATE TABLE walk_difficulties (
//!     id UUID PRIMARY KEY,
//!     code TEXT NOT NULL
//! );
//!
//! -- region_id / walk_difficulty_id carry no FK constraint: deleting a
//! -- region or difficulty leaves referencing walks in place.
//! CREATE TABLE walks (
//!     id UUID PRIMARY KEY,
//!     name TEXT NOT NULL,
//!     length DOUBLE PRECISION NOT NULL,
//!     region_id UUID NOT NULL,
//!     walk_difficulty_id UUID NOT NULL
//! );
//! ```

use futures::FutureExt;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    Region, RegionDraft, RegionId, Walk, WalkDifficulty, WalkDifficultyDraft, WalkDifficultyId,
    WalkDraft, WalkId,
};
use crate::infrastructure::{
    RegionRepository, RepositoryFuture, WalkDifficultyRepository, WalkRepository,
};

// =============================================================================
// Row Types
// =============================================================================

type RegionRow = (Uuid, String, String, f64, f64, f64, i64);
type WalkDifficultyRow = (Uuid, String);
type WalkRow = (Uuid, String, f64, Uuid, Uuid);

const REGION_COLUMNS: &str = "id, code, name, area, lat, long, population";
const WALK_DIFFICULTY_COLUMNS: &str = "id, code";
const WALK_COLUMNS: &str = "id, name, length, region_id, walk_difficulty_id";

fn region_from_row(row: RegionRow) -> Region {
    let (id, code, name, area, lat, long, population) = row;
    Region {
        id: RegionId::from_uuid(id),
        code,
        name,
        area,
        lat,
        long,
        population,
    }
}

fn walk_difficulty_from_row(row: WalkDifficultyRow) -> WalkDifficulty {
    let (id, code) = row;
    WalkDifficulty {
        id: WalkDifficultyId::from_uuid(id),
        code,
    }
}

fn walk_from_row(row: WalkRow) -> Walk {
    let (id, name, length, region_id, walk_difficulty_id) = row;
    Walk {
        id: WalkId::from_uuid(id),
        name,
        length,
        region_id: RegionId::from_uuid(region_id),
        walk_difficulty_id: WalkDifficultyId::from_uuid(walk_difficulty_id),
    }
}

// =============================================================================
// PostgreSQL Region Repository
// =============================================================================

/// `PostgreSQL` implementation of [`RegionRepository`].
///
/// # Example
///
/// ```ignore
/// let pool = PgPool::connect("postgres://localhost/nzwalks").await?;
/// let repository = PostgresRegionRepository::new(pool);
/// let regions = repository.get_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PostgresRegionRepository {
    pool: PgPool,
}

impl PostgresRegionRepository {
    /// Creates a new repository over the given connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RegionRepository for PostgresRegionRepository {
    fn get_all(&self) -> RepositoryFuture<Vec<Region>> {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<RegionRow> =
                sqlx::query_as(&format!("SELECT {REGION_COLUMNS} FROM regions ORDER BY id"))
                    .fetch_all(&pool)
                    .await?;
            Ok(rows.into_iter().map(region_from_row).collect())
        }
        .boxed()
    }

    fn get(&self, id: RegionId) -> RepositoryFuture<Option<Region>> {
        let pool = self.pool.clone();
        async move {
            let row: Option<RegionRow> =
                sqlx::query_as(&format!("SELECT {REGION_COLUMNS} FROM regions WHERE id = $1"))
                    .bind(id.as_uuid())
                    .fetch_optional(&pool)
                    .await?;
            Ok(row.map(region_from_row))
        }
        .boxed()
    }

    fn add(&self, draft: RegionDraft) -> RepositoryFuture<Region> {
        let pool = self.pool.clone();
        async move {
            let id = RegionId::generate();
            tracing::debug!(region_id = %id, "Inserting region");
            let row: RegionRow = sqlx::query_as(&format!(
                "INSERT INTO regions ({REGION_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7) \
                 RETURNING {REGION_COLUMNS}"
            ))
            .bind(id.as_uuid())
            .bind(&draft.code)
            .bind(&draft.name)
            .bind(draft.area)
            .bind(draft.lat)
            .bind(draft.long)
            .bind(draft.population)
            .fetch_one(&pool)
            .await?;
            Ok(region_from_row(row))
        }
        .boxed()
    }

    fn update(&self, id: RegionId, draft: RegionDraft) -> RepositoryFuture<Option<Region>> {
        let pool = self.pool.clone();
        async move {
            let row: Option<RegionRow> = sqlx::query_as(&format!(
                "UPDATE regions SET code = $2, name = $3, area = $4, lat = $5, long = $6, \
                 population = $7 WHERE id = $1 RETURNING {REGION_COLUMNS}"
            ))
            .bind(id.as_uuid())
            .bind(&draft.code)
            .bind(&draft.name)
            .bind(draft.area)
            .bind(draft.lat)
            .bind(draft.long)
            .bind(draft.population)
            .fetch_optional(&pool)
            .await?;
            Ok(row.map(region_from_row))
        }
        .boxed()
    }

    fn delete(&self, id: RegionId) -> RepositoryFuture<Option<Region>> {
        let pool = self.pool.clone();
        async move {
            let row: Option<RegionRow> = sqlx::query_as(&format!(
                "DELETE FROM regions WHERE id = $1 RETURNING {REGION_COLUMNS}"
            ))
            .bind(id.as_uuid())
            .fetch_optional(&pool)
            .await?;
            Ok(row.map(region_from_row))
        }
        .boxed()
    }
}

// =============================================================================
// PostgreSQL Walk Difficulty Repository
// =============================================================================

/// `PostgreSQL` implementation of [`WalkDifficultyRepository`].
#[derive(Debug, Clone)]
pub struct PostgresWalkDifficultyRepository {
    pool: PgPool,
}

impl PostgresWalkDifficultyRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl WalkDifficultyRepository for PostgresWalkDifficultyRepository {
    fn get_all(&self) -> RepositoryFuture<Vec<WalkDifficulty>> {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<WalkDifficultyRow> = sqlx::query_as(&format!(
                "SELECT {WALK_DIFFICULTY_COLUMNS} FROM walk_difficulties ORDER BY id"
            ))
            .fetch_all(&pool)
            .await?;
            Ok(rows.into_iter().map(walk_difficulty_from_row).collect())
        }
        .boxed()
    }

    fn get(&self, id: WalkDifficultyId) -> RepositoryFuture<Option<WalkDifficulty>> {
        let pool = self.pool.clone();
        async move {
            let row: Option<WalkDifficultyRow> = sqlx::query_as(&format!(
                "SELECT {WALK_DIFFICULTY_COLUMNS} FROM walk_difficulties WHERE id = $1"
            ))
            .bind(id.as_uuid())
            .fetch_optional(&pool)
            .await?;
            Ok(row.map(walk_difficulty_from_row))
        }
        .boxed()
    }

    fn add(&self, draft: WalkDifficultyDraft) -> RepositoryFuture<WalkDifficulty> {
        let pool = self.pool.clone();
        async move {
            let id = WalkDifficultyId::generate();
            tracing::debug!(walk_difficulty_id = %id, "Inserting walk difficulty");
            let row: WalkDifficultyRow = sqlx::query_as(&format!(
                "INSERT INTO walk_difficulties ({WALK_DIFFICULTY_COLUMNS}) VALUES ($1, $2) \
                 RETURNING {WALK_DIFFICULTY_COLUMNS}"
            ))
            .bind(id.as_uuid())
            .bind(&draft.code)
            .fetch_one(&pool)
            .await?;
            Ok(walk_difficulty_from_row(row))
        }
        .boxed()
    }

    fn update(
        &self,
        id: WalkDifficultyId,
        draft: WalkDifficultyDraft,
    ) -> RepositoryFuture<Option<WalkDifficulty>> {
        let pool = self.pool.clone();
        async move {
            let row: Option<WalkDifficultyRow> = sqlx::query_as(&format!(
                "UPDATE walk_difficulties SET code = $2 WHERE id = $1 \
                 RETURNING {WALK_DIFFICULTY_COLUMNS}"
            ))
            .bind(id.as_uuid())
            .bind(&draft.code)
            .fetch_optional(&pool)
            .await?;
            Ok(row.map(walk_difficulty_from_row))
        }
        .boxed()
    }

    fn delete(&self, id: WalkDifficultyId) -> RepositoryFuture<Option<WalkDifficulty>> {
        let pool = self.pool.clone();
        async move {
            let row: Option<WalkDifficultyRow> = sqlx::query_as(&format!(
                "DELETE FROM walk_difficulties WHERE id = $1 RETURNING {WALK_DIFFICULTY_COLUMNS}"
            ))
            .bind(id.as_uuid())
            .fetch_optional(&pool)
            .await?;
            Ok(row.map(walk_difficulty_from_row))
        }
        .boxed()
    }
}

// =============================================================================
// PostgreSQL Walk Repository
// =============================================================================

/// `PostgreSQL` implementation of [`WalkRepository`].
#[derive(Debug, Clone)]
pub struct PostgresWalkRepository {
    pool: PgPool,
}

impl PostgresWalkRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl WalkRepository for PostgresWalkRepository {
    fn get_all(&self) -> RepositoryFuture<Vec<Walk>> {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<WalkRow> =
                sqlx::query_as(&format!("SELECT {WALK_COLUMNS} FROM walks ORDER BY id"))
                    .fetch_all(&pool)
                    .await?;
            Ok(rows.into_iter().map(walk_from_row).collect())
        }
        .boxed()
    }

    fn get(&self, id: WalkId) -> RepositoryFuture<Option<Walk>> {
        let pool = self.pool.clone();
        async move {
            let row: Option<WalkRow> =
                sqlx::query_as(&format!("SELECT {WALK_COLUMNS} FROM walks WHERE id = $1"))
                    .bind(id.as_uuid())
                    .fetch_optional(&pool)
                    .await?;
            Ok(row.map(walk_from_row))
        }
        .boxed()
    }

    fn add(&self, draft: WalkDraft) -> RepositoryFuture<Walk> {
        let pool = self.pool.clone();
        async move {
            let id = WalkId::generate();
            tracing::debug!(walk_id = %id, "Inserting walk");
            let row: WalkRow = sqlx::query_as(&format!(
                "INSERT INTO walks ({WALK_COLUMNS}) VALUES ($1, $2, $3, $4, $5) \
                 RETURNING {WALK_COLUMNS}"
            ))
            .bind(id.as_uuid())
            .bind(&draft.name)
            .bind(draft.length)
            .bind(draft.region_id.as_uuid())
            .bind(draft.walk_difficulty_id.as_uuid())
            .fetch_one(&pool)
            .await?;
            Ok(walk_from_row(row))
        }
        .boxed()
    }

    fn update(&self, id: WalkId, draft: WalkDraft) -> RepositoryFuture<Option<Walk>> {
        let pool = self.pool.clone();
        async move {
            let row: Option<WalkRow> = sqlx::query_as(&format!(
                "UPDATE walks SET name = $2, length = $3, region_id = $4, \
                 walk_difficulty_id = $5 WHERE id = $1 RETURNING {WALK_COLUMNS}"
            ))
            .bind(id.as_uuid())
            .bind(&draft.name)
            .bind(draft.length)
            .bind(draft.region_id.as_uuid())
            .bind(draft.walk_difficulty_id.as_uuid())
            .fetch_optional(&pool)
            .await?;
            Ok(row.map(walk_from_row))
        }
        .boxed()
    }

    fn delete(&self, id: WalkId) -> RepositoryFuture<Option<Walk>> {
        let pool = self.pool.clone();
        async move {
            let row: Option<WalkRow> = sqlx::query_as(&format!(
                "DELETE FROM walks WHERE id = $1 RETURNING {WALK_COLUMNS}"
            ))
            .bind(id.as_uuid())
            .fetch_optional(&pool)
            .await?;
            Ok(row.map(walk_from_row))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_region_from_row() {
        let id = Uuid::now_v7();
        let region = region_from_row((
            id,
            "WGN".to_string(),
            "Wellington".to_string(),
            100.0,
            -41.3,
            174.8,
            200_000,
        ));

        assert_eq!(region.id, RegionId::from_uuid(id));
        assert_eq!(region.name, "Wellington");
        assert!((region.long - 174.8).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_walk_from_row_keeps_references() {
        let region_id = Uuid::now_v7();
        let walk_difficulty_id = Uuid::now_v7();
        let walk = walk_from_row((
            Uuid::now_v7(),
            "Routeburn Track".to_string(),
            32.0,
            region_id,
            walk_difficulty_id,
        ));

        assert_eq!(walk.region_id.as_uuid(), &region_id);
        assert_eq!(walk.walk_difficulty_id.as_uuid(), &walk_difficulty_id);
    }
}
