//! NZ Walks API library.
//!
//! Regions, walk difficulties and walks exposed as REST resources over a
//! pluggable repository backend (in-memory or `PostgreSQL`).

pub mod api;
pub mod domain;
pub mod infrastructure;
