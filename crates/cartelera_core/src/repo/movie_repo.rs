//! Movie record operations and their SQLite implementation.
//!
//! # Responsibility
//! - Translate between `Movie` instances and rows of the `cartelera` table.
//! - Normalize every storage failure into the operation's negative result.
//!
//! # Invariants
//! - One connection per operation, obtained from the factory and released
//!   before returning, regardless of outcome.
//! - Not-found is a structural result (`false`/`None`/empty), never an
//!   error; only the diagnostic log distinguishes it from real failures.
//! - Read paths reject structurally corrupt rows instead of surfacing them.

use crate::db::{ConnectionFactory, DbError};
use crate::model::movie::Movie;
use log::{error, info, warn};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MOVIE_SELECT_SQL: &str = "SELECT
    id,
    title,
    director,
    year,
    duration,
    genre
FROM cartelera";

pub type RepoResult<T> = Result<T, RepoError>;

/// Internal error for the fallible half of each operation.
///
/// Never crosses the public repository surface; it exists so the SQL
/// helpers can use `?` and so diagnostics carry a printable cause.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted movie data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Record-access contract for the movie catalog.
///
/// Mutating operations report plain success/failure; lookups report
/// presence. Storage failures are absorbed by the implementation and only
/// show up as a logged diagnostic next to the negative result.
pub trait MovieRepository {
    /// Writes the five data fields as a new row. On success the
    /// store-assigned id is stamped into `movie` and the result is `true`
    /// exactly when one row was created.
    fn insert(&self, movie: &mut Movie) -> bool;
    /// Overwrites all five data fields of the row matching `movie.id()`.
    /// Returns `true` only when that row existed. A movie without a
    /// persisted id (`id <= 0`) is rejected without touching the store.
    fn update(&self, movie: &Movie) -> bool;
    /// Removes the row with the given id; `true` only when a row went away.
    /// A second call for the same id returns `false`.
    fn delete_by_id(&self, id: i64) -> bool;
    /// Bulk-removes every row with exactly this title and returns how many
    /// went away. Cleanup path for fixtures, not part of the user flow.
    fn delete_by_title(&self, title: &str) -> usize;
    /// Looks one row up by id.
    fn find_by_id(&self, id: i64) -> Option<Movie>;
    /// Looks the first row up by exact title, lowest id first.
    fn find_by_title(&self, title: &str) -> Option<Movie>;
    /// Case-sensitive substring search over titles, ordered by id. An empty
    /// vec means "nothing matched"; it is never an error.
    fn find_by_partial_title(&self, fragment: &str) -> Vec<Movie>;
    /// Every row, ordered by id ascending.
    fn list_all(&self) -> Vec<Movie>;
}

/// SQLite-backed movie repository.
///
/// Holds only the connection factory; all connection lifetime is scoped to
/// the single operation using it.
pub struct SqliteMovieRepository {
    factory: ConnectionFactory,
}

impl SqliteMovieRepository {
    pub fn new(factory: ConnectionFactory) -> Self {
        Self { factory }
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn insert(&self, movie: &mut Movie) -> bool {
        let Some(conn) = self.factory.open() else {
            error!("event=movie_insert module=repo status=error error_code=storage_unavailable");
            return false;
        };
        match try_insert(&conn, movie) {
            Ok(Some(id)) => {
                movie.set_id(id);
                info!("event=movie_insert module=repo status=ok id={id}");
                true
            }
            Ok(None) => {
                warn!("event=movie_insert module=repo status=error error_code=no_rows_affected");
                false
            }
            Err(err) => {
                error!("event=movie_insert module=repo status=error error={err}");
                false
            }
        }
    }

    fn update(&self, movie: &Movie) -> bool {
        if movie.id() <= 0 {
            warn!(
                "event=movie_update module=repo status=error error_code=invalid_id id={}",
                movie.id()
            );
            return false;
        }
        let Some(conn) = self.factory.open() else {
            error!("event=movie_update module=repo status=error error_code=storage_unavailable");
            return false;
        };
        match try_update(&conn, movie) {
            Ok(1) => {
                info!(
                    "event=movie_update module=repo status=ok id={}",
                    movie.id()
                );
                true
            }
            Ok(_) => {
                warn!(
                    "event=movie_update module=repo status=error error_code=not_found id={}",
                    movie.id()
                );
                false
            }
            Err(err) => {
                error!("event=movie_update module=repo status=error error={err}");
                false
            }
        }
    }

    fn delete_by_id(&self, id: i64) -> bool {
        let Some(conn) = self.factory.open() else {
            error!("event=movie_delete module=repo status=error error_code=storage_unavailable");
            return false;
        };
        match try_delete_by_id(&conn, id) {
            Ok(0) => {
                warn!("event=movie_delete module=repo status=error error_code=not_found id={id}");
                false
            }
            Ok(_) => {
                info!("event=movie_delete module=repo status=ok id={id}");
                true
            }
            Err(err) => {
                error!("event=movie_delete module=repo status=error error={err}");
                false
            }
        }
    }

    fn delete_by_title(&self, title: &str) -> usize {
        let Some(conn) = self.factory.open() else {
            error!(
                "event=movie_delete_by_title module=repo status=error \
                 error_code=storage_unavailable"
            );
            return 0;
        };
        match try_delete_by_title(&conn, title) {
            Ok(rows) => {
                info!("event=movie_delete_by_title module=repo status=ok rows={rows}");
                rows
            }
            Err(err) => {
                error!("event=movie_delete_by_title module=repo status=error error={err}");
                0
            }
        }
    }

    fn find_by_id(&self, id: i64) -> Option<Movie> {
        let Some(conn) = self.factory.open() else {
            error!("event=movie_find_by_id module=repo status=error error_code=storage_unavailable");
            return None;
        };
        match try_find_by_id(&conn, id) {
            Ok(found) => found,
            Err(err) => {
                error!("event=movie_find_by_id module=repo status=error error={err}");
                None
            }
        }
    }

    fn find_by_title(&self, title: &str) -> Option<Movie> {
        let Some(conn) = self.factory.open() else {
            error!(
                "event=movie_find_by_title module=repo status=error \
                 error_code=storage_unavailable"
            );
            return None;
        };
        match try_find_by_title(&conn, title) {
            Ok(found) => found,
            Err(err) => {
                error!("event=movie_find_by_title module=repo status=error error={err}");
                None
            }
        }
    }

    fn find_by_partial_title(&self, fragment: &str) -> Vec<Movie> {
        let Some(conn) = self.factory.open() else {
            error!("event=movie_search module=repo status=error error_code=storage_unavailable");
            return Vec::new();
        };
        match try_find_by_partial_title(&conn, fragment) {
            Ok(movies) => movies,
            Err(err) => {
                error!("event=movie_search module=repo status=error error={err}");
                Vec::new()
            }
        }
    }

    fn list_all(&self) -> Vec<Movie> {
        let Some(conn) = self.factory.open() else {
            error!("event=movie_list module=repo status=error error_code=storage_unavailable");
            return Vec::new();
        };
        match try_list_all(&conn) {
            Ok(movies) => movies,
            Err(err) => {
                error!("event=movie_list module=repo status=error error={err}");
                Vec::new()
            }
        }
    }
}

fn try_insert(conn: &Connection, movie: &Movie) -> RepoResult<Option<i64>> {
    let changed = conn.execute(
        "INSERT INTO cartelera (title, director, year, duration, genre)
         VALUES (?1, ?2, ?3, ?4, ?5);",
        params![
            movie.title(),
            movie.director(),
            movie.year(),
            movie.duration(),
            movie.genre(),
        ],
    )?;
    if changed == 1 {
        Ok(Some(conn.last_insert_rowid()))
    } else {
        Ok(None)
    }
}

fn try_update(conn: &Connection, movie: &Movie) -> RepoResult<usize> {
    let changed = conn.execute(
        "UPDATE cartelera
         SET
            title = ?1,
            director = ?2,
            year = ?3,
            duration = ?4,
            genre = ?5
         WHERE id = ?6;",
        params![
            movie.title(),
            movie.director(),
            movie.year(),
            movie.duration(),
            movie.genre(),
            movie.id(),
        ],
    )?;
    Ok(changed)
}

fn try_delete_by_id(conn: &Connection, id: i64) -> RepoResult<usize> {
    let changed = conn.execute("DELETE FROM cartelera WHERE id = ?1;", params![id])?;
    Ok(changed)
}

fn try_delete_by_title(conn: &Connection, title: &str) -> RepoResult<usize> {
    let changed = conn.execute("DELETE FROM cartelera WHERE title = ?1;", params![title])?;
    Ok(changed)
}

fn try_find_by_id(conn: &Connection, id: i64) -> RepoResult<Option<Movie>> {
    let mut stmt = conn.prepare(&format!("{MOVIE_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query(params![id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(movie_from_row(row)?));
    }
    Ok(None)
}

fn try_find_by_title(conn: &Connection, title: &str) -> RepoResult<Option<Movie>> {
    let mut stmt = conn.prepare(&format!(
        "{MOVIE_SELECT_SQL} WHERE title = ?1 ORDER BY id ASC LIMIT 1;"
    ))?;
    let mut rows = stmt.query(params![title])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(movie_from_row(row)?));
    }
    Ok(None)
}

// `LIKE '%..%'` is case-insensitive for ASCII in SQLite, and the fragment
// could smuggle `%`/`_` wildcards. `instr` keeps the match a literal,
// case-sensitive substring test.
fn try_find_by_partial_title(conn: &Connection, fragment: &str) -> RepoResult<Vec<Movie>> {
    let mut stmt = conn.prepare(&format!(
        "{MOVIE_SELECT_SQL} WHERE instr(title, ?1) > 0 ORDER BY id ASC;"
    ))?;
    let mut rows = stmt.query(params![fragment])?;
    let mut movies = Vec::new();
    while let Some(row) = rows.next()? {
        movies.push(movie_from_row(row)?);
    }
    Ok(movies)
}

fn try_list_all(conn: &Connection) -> RepoResult<Vec<Movie>> {
    let mut stmt = conn.prepare(&format!("{MOVIE_SELECT_SQL} ORDER BY id ASC;"))?;
    let mut rows = stmt.query([])?;
    let mut movies = Vec::new();
    while let Some(row) = rows.next()? {
        movies.push(movie_from_row(row)?);
    }
    Ok(movies)
}

fn movie_from_row(row: &Row<'_>) -> RepoResult<Movie> {
    let id: i64 = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "non-positive id `{id}` in cartelera.id"
        )));
    }
    Ok(Movie::with_id(
        id,
        row.get::<_, String>("title")?,
        row.get::<_, String>("director")?,
        row.get::<_, i32>("year")?,
        row.get::<_, i32>("duration")?,
        row.get::<_, String>("genre")?,
    ))
}
