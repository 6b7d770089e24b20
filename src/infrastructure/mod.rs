//! Infrastructure module for persistence.
//!
//! Repository traits, their in-memory and `PostgreSQL` implementations, and
//! the factory that selects a backend from configuration.

pub mod factory;
pub mod in_memory;
pub mod postgres;
pub mod repository;

pub use factory::{
    ConfigurationError, FactoryError, Repositories, RepositoryConfig, RepositoryFactory,
    StorageMode,
};
pub use in_memory::{
    InMemoryRegionRepository, InMemoryWalkDifficultyRepository, InMemoryWalkRepository,
};
pub use postgres::{
    PostgresRegionRepository, PostgresWalkDifficultyRepository, PostgresWalkRepository,
};
pub use repository::{
    RegionRepository, RepositoryError, RepositoryFuture, WalkDifficultyRepository, WalkRepository,
};
