//! Core domain logic for the Cartelera movie catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{ConnectionFactory, DbConfig, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::movie::{supported_genres, Movie, MovieValidationError};
pub use repo::movie_repo::{MovieRepository, RepoError, RepoResult, SqliteMovieRepository};
pub use service::movie_service::{MovieResult, MovieService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
