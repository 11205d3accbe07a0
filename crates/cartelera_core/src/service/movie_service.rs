//! Movie use-case service and outcome wrapper.
//!
//! # Responsibility
//! - Guard mutating operations with the final candidate checks (missing
//!   selection, unassigned id) before touching record access.
//! - Produce one fixed user-facing message per operation outcome.
//!
//! # Invariants
//! - Messages are the literal strings the forms display; they are the only
//!   localization this crate carries.
//! - Nothing here is fatal: the worst outcome is a failure result.

use crate::model::movie::{Movie, MovieValidationError};
use crate::repo::movie_repo::MovieRepository;

const MSG_MOVIE_REQUIRED: &str = "Los datos de la película son requeridos";
const MSG_INVALID_ID: &str = "La película seleccionada no tiene un identificador válido";
const MSG_ADD_OK: &str = "Película agregada exitosamente";
const MSG_ADD_FAILED: &str = "Error al guardar la película en la base de datos";
const MSG_UPDATE_OK: &str = "Película actualizada exitosamente";
const MSG_UPDATE_FAILED: &str = "No se pudo actualizar la película en la base de datos";
const MSG_DELETE_OK: &str = "Película eliminada exitosamente";
const MSG_DELETE_FAILED: &str = "No se pudo eliminar la película de la base de datos";

/// Outcome of one mutating catalog operation.
///
/// The message is ready for direct display; callers branch on `success`
/// only to pick the dialog severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieResult {
    pub success: bool,
    pub message: String,
}

impl MovieResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Field validation reported through the same channel as operation
/// failures, so the forms layer handles exactly one result shape.
impl From<MovieValidationError> for MovieResult {
    fn from(err: MovieValidationError) -> Self {
        Self::failure(format!("Error de validación: {err}"))
    }
}

/// Use-case facade over a movie repository.
///
/// Stateless between calls; safe to share behind any single calling thread
/// at a time.
pub struct MovieService<R: MovieRepository> {
    repo: R,
}

impl<R: MovieRepository> MovieService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new catalog entry.
    ///
    /// `None` covers the forms' "no movie bound" state and fails without a
    /// store call. On success the movie carries its store-assigned id.
    pub fn add_movie(&self, movie: Option<&mut Movie>) -> MovieResult {
        let Some(movie) = movie else {
            return MovieResult::failure(MSG_MOVIE_REQUIRED);
        };
        if self.repo.insert(movie) {
            MovieResult::success(MSG_ADD_OK)
        } else {
            MovieResult::failure(MSG_ADD_FAILED)
        }
    }

    /// Overwrites the persisted row matching the movie's id.
    ///
    /// Rejects a missing candidate and an unassigned id before delegating;
    /// a vanished row surfaces as the fixed update failure.
    pub fn update_movie(&self, movie: Option<&Movie>) -> MovieResult {
        let Some(movie) = movie else {
            return MovieResult::failure(MSG_MOVIE_REQUIRED);
        };
        if movie.id() <= 0 {
            return MovieResult::failure(MSG_INVALID_ID);
        }
        if self.repo.update(movie) {
            MovieResult::success(MSG_UPDATE_OK)
        } else {
            MovieResult::failure(MSG_UPDATE_FAILED)
        }
    }

    /// Removes one catalog entry by id.
    ///
    /// The non-positive-id guard lives here; the access layer just attempts
    /// the delete. The forms layer confirms with the user before calling.
    pub fn delete_movie_by_id(&self, id: i64) -> MovieResult {
        if id <= 0 {
            return MovieResult::failure(MSG_INVALID_ID);
        }
        if self.repo.delete_by_id(id) {
            MovieResult::success(MSG_DELETE_OK)
        } else {
            MovieResult::failure(MSG_DELETE_FAILED)
        }
    }

    /// Looks a movie up by store id.
    pub fn find_movie_by_id(&self, id: i64) -> Option<Movie> {
        self.repo.find_by_id(id)
    }

    /// Looks a movie up by exact title, for the edit/delete search boxes.
    pub fn find_movie_by_title(&self, title: &str) -> Option<Movie> {
        self.repo.find_by_title(title)
    }

    /// Case-sensitive substring search over titles.
    pub fn search_movies_by_title(&self, fragment: &str) -> Vec<Movie> {
        self.repo.find_by_partial_title(fragment)
    }

    /// Full catalog in id order, for the list view refresh.
    pub fn list_movies(&self) -> Vec<Movie> {
        self.repo.list_all()
    }
}
