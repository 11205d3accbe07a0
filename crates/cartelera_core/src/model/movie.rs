//! Movie domain model.
//!
//! # Responsibility
//! - Define the catalog record persisted in the `cartelera` table.
//! - Enforce field invariants at assignment time through fallible setters.
//!
//! # Invariants
//! - A field assigned through a setter that returned `Ok` satisfies its
//!   constraint; a failed setter leaves the previous value untouched.
//! - `id <= 0` means "not yet persisted"; the store assigns ids on insert.

use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// First year a film was ever released.
const MIN_YEAR: i32 = 1888;
/// Years past the current calendar year a release may be announced for.
const MAX_YEAR_AHEAD: i32 = 5;
const MAX_TITLE_CHARS: usize = 150;
const MAX_DIRECTOR_CHARS: usize = 50;
const MAX_DURATION_MINUTES: i32 = 999;

const GENRES: &[&str] = &[
    "Acción",
    "Drama",
    "Comedia",
    "Terror",
    "Romance",
    "Ciencia Ficción",
    "Thriller",
    "Aventura",
    "Animación",
    "Documental",
];

// Letters (including Spanish accents), digits, whitespace and basic
// punctuation. `ü` is accepted in director names only.
static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[a-zA-ZáéíóúÁÉÍÓÚñÑ0-9\s.,;:!?\-()\[\]"']+$"#).expect("valid title regex")
});
static DIRECTOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ\s.\-]+$").expect("valid director regex")
});

/// Returns the fixed set of genres a movie may carry.
///
/// The UI populates its genre selector from this list; `set_genre` accepts
/// any casing of these entries.
pub fn supported_genres() -> &'static [&'static str] {
    GENRES
}

/// One catalog entry.
///
/// Fields are private so every mutation goes through a validating setter.
/// Constructors do not validate; a freshly constructed instance may hold
/// out-of-range values until the setters have been run (form-binding fills
/// the fields one at a time).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    id: i64,
    title: String,
    director: String,
    year: i32,
    duration: i32,
    genre: String,
}

impl Movie {
    /// Creates an empty movie with an unassigned id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a movie from raw field values, id unassigned.
    ///
    /// No validation is performed here; callers that need the invariants
    /// must go through the setters.
    pub fn with_fields(
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        duration: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            director: director.into(),
            year,
            duration,
            genre: genre.into(),
        }
    }

    /// Creates a movie from a persisted row, including its store id.
    pub fn with_id(
        id: i64,
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        duration: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            ..Self::with_fields(title, director, year, duration, genre)
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Overwrites the store id. Not validated; the persistence layer stamps
    /// the generated id here after a successful insert.
    pub fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Assigns the title.
    ///
    /// # Errors
    /// - [`MovieValidationError::EmptyTitle`] when blank.
    /// - [`MovieValidationError::TitleTooLong`] past 150 characters.
    /// - [`MovieValidationError::TitleInvalidChars`] outside the allowed set
    ///   (letters with Spanish accents, digits, whitespace, basic
    ///   punctuation).
    pub fn set_title(&mut self, value: &str) -> Result<(), MovieValidationError> {
        if value.trim().is_empty() {
            return Err(MovieValidationError::EmptyTitle);
        }
        if value.chars().count() > MAX_TITLE_CHARS {
            return Err(MovieValidationError::TitleTooLong);
        }
        if !TITLE_RE.is_match(value) {
            return Err(MovieValidationError::TitleInvalidChars);
        }
        self.title = value.to_string();
        Ok(())
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    /// Assigns the director name. Digits are rejected; `ü` is allowed.
    ///
    /// # Errors
    /// - [`MovieValidationError::EmptyDirector`] when blank.
    /// - [`MovieValidationError::DirectorTooLong`] past 50 characters.
    /// - [`MovieValidationError::DirectorInvalidChars`] for anything but
    ///   letters, whitespace, periods and hyphens.
    pub fn set_director(&mut self, value: &str) -> Result<(), MovieValidationError> {
        if value.trim().is_empty() {
            return Err(MovieValidationError::EmptyDirector);
        }
        if value.chars().count() > MAX_DIRECTOR_CHARS {
            return Err(MovieValidationError::DirectorTooLong);
        }
        if !DIRECTOR_RE.is_match(value) {
            return Err(MovieValidationError::DirectorInvalidChars);
        }
        self.director = value.to_string();
        Ok(())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Assigns the release year.
    ///
    /// The upper bound is the current calendar year plus five, evaluated
    /// against the wall clock on every call rather than a fixed constant.
    ///
    /// # Errors
    /// - [`MovieValidationError::YearTooEarly`] before 1888.
    /// - [`MovieValidationError::YearTooLate`] past the moving upper bound.
    pub fn set_year(&mut self, value: i32) -> Result<(), MovieValidationError> {
        let max = Local::now().year() + MAX_YEAR_AHEAD;
        if value < MIN_YEAR {
            return Err(MovieValidationError::YearTooEarly);
        }
        if value > max {
            return Err(MovieValidationError::YearTooLate { max });
        }
        self.year = value;
        Ok(())
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Assigns the duration in minutes, 1..=999.
    ///
    /// # Errors
    /// - [`MovieValidationError::NonPositiveDuration`] for zero or less.
    /// - [`MovieValidationError::DurationTooLong`] past 999 minutes.
    pub fn set_duration(&mut self, value: i32) -> Result<(), MovieValidationError> {
        if value <= 0 {
            return Err(MovieValidationError::NonPositiveDuration);
        }
        if value > MAX_DURATION_MINUTES {
            return Err(MovieValidationError::DurationTooLong);
        }
        self.duration = value;
        Ok(())
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Assigns the genre.
    ///
    /// Matching against the fixed genre set is case-insensitive, but the
    /// value is stored exactly as given, not normalized to the canonical
    /// spelling.
    ///
    /// # Errors
    /// - [`MovieValidationError::EmptyGenre`] when blank.
    /// - [`MovieValidationError::UnknownGenre`] when no entry matches.
    pub fn set_genre(&mut self, value: &str) -> Result<(), MovieValidationError> {
        if value.trim().is_empty() {
            return Err(MovieValidationError::EmptyGenre);
        }
        if !genre_matches(value) {
            return Err(MovieValidationError::UnknownGenre);
        }
        self.genre = value.to_string();
        Ok(())
    }

    /// Instance-level sanity check used before a final save.
    ///
    /// Deliberately looser than the setters and kept that way: the year
    /// window is 1800 exclusive to 2030 inclusive and the duration has no
    /// upper bound. Do not unify with the setter ranges without revisiting
    /// every caller.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.director.trim().is_empty()
            && self.year > 1800
            && self.year <= 2030
            && self.duration > 0
            && !self.genre.trim().is_empty()
    }

    /// Renders the duration as hours and minutes, e.g. "2h 15m" or "45m".
    pub fn formatted_duration(&self) -> String {
        let hours = self.duration / 60;
        let minutes = self.duration % 60;
        if hours > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{minutes}m")
        }
    }
}

/// Case-insensitive membership test against the fixed genre set.
///
/// Unicode lowercasing, not ASCII: `CIENCIA FICCIÓN` must match
/// `Ciencia Ficción`.
fn genre_matches(value: &str) -> bool {
    let lowered = value.to_lowercase();
    GENRES.iter().any(|genre| genre.to_lowercase() == lowered)
}

/// Field-level validation failure raised by the `Movie` setters.
///
/// The rendered text is the user-facing message shown by the forms layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieValidationError {
    EmptyTitle,
    TitleTooLong,
    TitleInvalidChars,
    EmptyDirector,
    DirectorTooLong,
    DirectorInvalidChars,
    YearTooEarly,
    YearTooLate { max: i32 },
    NonPositiveDuration,
    DurationTooLong,
    EmptyGenre,
    UnknownGenre,
}

impl Display for MovieValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "El título no puede estar vacío"),
            Self::TitleTooLong => write!(f, "El título no puede exceder 150 caracteres"),
            Self::TitleInvalidChars => write!(f, "El título contiene caracteres no válidos"),
            Self::EmptyDirector => write!(f, "El director no puede estar vacío"),
            Self::DirectorTooLong => {
                write!(f, "El nombre del director no puede exceder 50 caracteres")
            }
            Self::DirectorInvalidChars => write!(
                f,
                "El nombre del director solo debe contener letras, espacios, puntos y guiones"
            ),
            Self::YearTooEarly => write!(
                f,
                "El año debe ser mayor a 1887 (primera película de la historia)"
            ),
            Self::YearTooLate { max } => write!(f, "El año no puede ser mayor a {max}"),
            Self::NonPositiveDuration => write!(f, "La duración debe ser mayor a 0 minutos"),
            Self::DurationTooLong => write!(f, "La duración no puede exceder 999 minutos"),
            Self::EmptyGenre => write!(f, "El género es obligatorio"),
            Self::UnknownGenre => write!(f, "El género seleccionado no es válido"),
        }
    }
}

impl Error for MovieValidationError {}

#[cfg(test)]
mod tests {
    use super::{genre_matches, supported_genres, DIRECTOR_RE, TITLE_RE};

    #[test]
    fn title_charset_accepts_punctuation_and_digits() {
        assert!(TITLE_RE.is_match("2001: Una Odisea del Espacio"));
        assert!(TITLE_RE.is_match("Amores Perros (2000) - corte del director, sí!"));
        assert!(TITLE_RE.is_match(r#"El "Gran" Escape [1963]"#));
    }

    #[test]
    fn title_charset_rejects_symbols_outside_the_set() {
        assert!(!TITLE_RE.is_match("Movie@Home"));
        assert!(!TITLE_RE.is_match("50% Descuento"));
        // `ü` is a director-name concession only.
        assert!(!TITLE_RE.is_match("Über"));
    }

    #[test]
    fn director_charset_rejects_digits() {
        assert!(DIRECTOR_RE.is_match("Jean-Pierre Jeunet"));
        assert!(DIRECTOR_RE.is_match("J. J. Abrams"));
        assert!(DIRECTOR_RE.is_match("Günther Grass"));
        assert!(!DIRECTOR_RE.is_match("Director123"));
    }

    #[test]
    fn genre_match_is_case_insensitive_including_accents() {
        assert!(genre_matches("drama"));
        assert!(genre_matches("DRAMA"));
        assert!(genre_matches("ciencia ficción"));
        assert!(genre_matches("CIENCIA FICCIÓN"));
        assert!(!genre_matches("Fantasia"));
    }

    #[test]
    fn supported_genres_is_the_fixed_catalog_set() {
        let genres = supported_genres();
        assert_eq!(genres.len(), 10);
        assert!(genres.contains(&"Ciencia Ficción"));
    }
}
