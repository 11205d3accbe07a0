//! Connection factory over an injected database configuration.
//!
//! # Responsibility
//! - Open, close and probe SQLite connections for the catalog database.
//! - Run connection bootstrap (pragmas, pending migrations) on every open.
//!
//! # Invariants
//! - Connection parameters live in the injected [`DbConfig`], never in
//!   process-wide state.
//! - A connection returned by [`ConnectionFactory::open`] has
//!   `foreign_keys=ON` and the full schema applied.
//! - Open failures are logged and surfaced as `None`, not as panics.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Storage configuration handed to the factory at construction.
///
/// The catalog lives in a single SQLite file, so the whole configuration is
/// its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    path: PathBuf,
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Hands out ready-to-use connections to the catalog database.
///
/// Access operations open one connection per call and release it before
/// returning, so the factory itself holds no connection state.
#[derive(Debug, Clone)]
pub struct ConnectionFactory {
    config: DbConfig,
}

impl ConnectionFactory {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Opens a connection, or `None` when the database is unreachable.
    ///
    /// # Side effects
    /// - Applies bootstrap pragmas and any pending migrations.
    /// - Emits `db_open` events; the failure diagnostic carries the cause.
    pub fn open(&self) -> Option<Connection> {
        let started_at = Instant::now();
        match self.try_open() {
            Ok(conn) => {
                info!(
                    "event=db_open module=db status=ok path={} duration_ms={}",
                    self.config.path.display(),
                    started_at.elapsed().as_millis()
                );
                Some(conn)
            }
            Err(err) => {
                error!(
                    "event=db_open module=db status=error path={} duration_ms={} error={}",
                    self.config.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                None
            }
        }
    }

    /// Closes a connection, logging instead of propagating close failures.
    ///
    /// Dropping a connection also releases it; this explicit form exists for
    /// callers that must observe the close, such as the connectivity probe.
    pub fn close(conn: Connection) {
        if let Err((_conn, err)) = conn.close() {
            error!("event=db_close module=db status=error error={err}");
        }
    }

    /// Opens and immediately closes a connection.
    ///
    /// Startup gate for the application shell: a `false` here means the
    /// catalog database cannot be used at all.
    pub fn test_connection(&self) -> bool {
        match self.open() {
            Some(conn) => {
                Self::close(conn);
                info!("event=db_test module=db status=ok");
                true
            }
            None => {
                error!("event=db_test module=db status=error");
                false
            }
        }
    }

    fn try_open(&self) -> DbResult<Connection> {
        let mut conn = Connection::open(&self.config.path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        apply_migrations(&mut conn)?;
        Ok(conn)
    }
}
