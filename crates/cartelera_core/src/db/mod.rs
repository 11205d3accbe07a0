//! SQLite storage bootstrap for the movie catalog.
//!
//! # Responsibility
//! - Hold the injected database configuration and hand out connections.
//! - Apply schema migrations before any connection is used for data.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - No caller sees a connection whose migrations have not been applied.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod factory;
pub mod migrations;

pub use factory::{ConnectionFactory, DbConfig};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "catalog schema version {db_version} is newer than this build supports \
                 ({latest_supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
