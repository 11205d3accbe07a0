//! Record access for the movie catalog.
//!
//! # Responsibility
//! - Define the storage-facing operation contract consumed by orchestration.
//! - Keep SQL and connection handling behind the repository boundary.
//!
//! # Invariants
//! - Storage failures never cross this boundary: every operation normalizes
//!   them to a negative/absent/empty result plus a logged diagnostic.
//! - Each operation acquires one connection and releases it before
//!   returning, on every path.

pub mod movie_repo;
