use cartelera_core::{Movie, MovieValidationError};
use chrono::{Datelike, Local};

#[test]
fn setters_build_a_fully_valid_movie() {
    let mut movie = Movie::new();
    movie.set_title("El laberinto del fauno").unwrap();
    movie.set_director("Guillermo del Toro").unwrap();
    movie.set_year(2006).unwrap();
    movie.set_duration(118).unwrap();
    movie.set_genre("Drama").unwrap();

    assert_eq!(movie.id(), 0);
    assert_eq!(movie.title(), "El laberinto del fauno");
    assert_eq!(movie.director(), "Guillermo del Toro");
    assert_eq!(movie.year(), 2006);
    assert_eq!(movie.duration(), 118);
    assert_eq!(movie.genre(), "Drama");
    assert!(movie.is_valid());
}

#[test]
fn failed_setter_keeps_the_previous_value() {
    let mut movie = Movie::new();
    movie.set_title("Amores Perros").unwrap();

    let err = movie.set_title("   ").unwrap_err();
    assert_eq!(err, MovieValidationError::EmptyTitle);
    assert_eq!(movie.title(), "Amores Perros");

    let err = movie.set_title("Correo: alguien@dominio").unwrap_err();
    assert_eq!(err, MovieValidationError::TitleInvalidChars);
    assert_eq!(movie.title(), "Amores Perros");
}

#[test]
fn title_length_is_capped_at_150_characters() {
    let mut movie = Movie::new();

    let exactly_max = "á".repeat(150);
    movie.set_title(&exactly_max).unwrap();
    assert_eq!(movie.title(), exactly_max);

    let too_long = "á".repeat(151);
    let err = movie.set_title(&too_long).unwrap_err();
    assert_eq!(err, MovieValidationError::TitleTooLong);
    assert_eq!(err.to_string(), "El título no puede exceder 150 caracteres");
}

#[test]
fn title_accepts_spanish_punctuation_but_not_umlauts() {
    let mut movie = Movie::new();
    movie
        .set_title("Relatos salvajes (2014): corte del director, sí!")
        .unwrap();

    let err = movie.set_title("Über lo imposible").unwrap_err();
    assert_eq!(err, MovieValidationError::TitleInvalidChars);
}

#[test]
fn director_rejects_digits_and_accepts_umlauts() {
    let mut movie = Movie::new();
    movie.set_director("Jürgen Müller").unwrap();
    movie.set_director("Alejandro G. Iñárritu").unwrap();

    let err = movie.set_director("Director 2").unwrap_err();
    assert_eq!(err, MovieValidationError::DirectorInvalidChars);
    assert_eq!(
        err.to_string(),
        "El nombre del director solo debe contener letras, espacios, puntos y guiones"
    );
    assert_eq!(movie.director(), "Alejandro G. Iñárritu");
}

#[test]
fn director_rejects_blank_and_overlong_names() {
    let mut movie = Movie::new();

    let err = movie.set_director("").unwrap_err();
    assert_eq!(err, MovieValidationError::EmptyDirector);
    assert_eq!(err.to_string(), "El director no puede estar vacío");

    let err = movie.set_director(&"a".repeat(51)).unwrap_err();
    assert_eq!(err, MovieValidationError::DirectorTooLong);
    movie.set_director(&"a".repeat(50)).unwrap();
}

#[test]
fn year_window_follows_the_wall_clock() {
    let current_year = Local::now().year();
    let mut movie = Movie::new();

    movie.set_year(1888).unwrap();
    movie.set_year(current_year + 5).unwrap();
    assert_eq!(movie.year(), current_year + 5);

    let err = movie.set_year(1887).unwrap_err();
    assert_eq!(err, MovieValidationError::YearTooEarly);
    assert_eq!(
        err.to_string(),
        "El año debe ser mayor a 1887 (primera película de la historia)"
    );

    let err = movie.set_year(current_year + 6).unwrap_err();
    assert_eq!(
        err,
        MovieValidationError::YearTooLate {
            max: current_year + 5
        }
    );
    assert_eq!(
        err.to_string(),
        format!("El año no puede ser mayor a {}", current_year + 5)
    );
    assert_eq!(movie.year(), current_year + 5);
}

#[test]
fn duration_must_stay_within_1_to_999_minutes() {
    let mut movie = Movie::new();

    movie.set_duration(1).unwrap();
    movie.set_duration(999).unwrap();

    let err = movie.set_duration(0).unwrap_err();
    assert_eq!(err, MovieValidationError::NonPositiveDuration);
    assert_eq!(err.to_string(), "La duración debe ser mayor a 0 minutos");

    let err = movie.set_duration(1000).unwrap_err();
    assert_eq!(err, MovieValidationError::DurationTooLong);
    assert_eq!(movie.duration(), 999);
}

#[test]
fn genre_matching_ignores_case_but_stores_raw_casing() {
    let mut movie = Movie::new();

    movie.set_genre("drama").unwrap();
    assert_eq!(movie.genre(), "drama");

    movie.set_genre("CIENCIA FICCIÓN").unwrap();
    assert_eq!(movie.genre(), "CIENCIA FICCIÓN");

    let err = movie.set_genre("Ópera").unwrap_err();
    assert_eq!(err, MovieValidationError::UnknownGenre);
    assert_eq!(err.to_string(), "El género seleccionado no es válido");
    assert_eq!(movie.genre(), "CIENCIA FICCIÓN");

    let err = movie.set_genre(" ").unwrap_err();
    assert_eq!(err, MovieValidationError::EmptyGenre);
    assert_eq!(err.to_string(), "El género es obligatorio");
}

#[test]
fn record_level_check_is_looser_than_the_setters() {
    // 1801 and an unbounded duration pass the record-level check even though
    // the setters would reject them; the two checks serve different callers.
    let lenient = Movie::with_fields("Archivo", "Alguien", 1801, 5000, "Drama");
    assert!(lenient.is_valid());

    let too_far_ahead = Movie::with_fields("Archivo", "Alguien", 2031, 90, "Drama");
    assert!(!too_far_ahead.is_valid());

    let blank_director = Movie::with_fields("Archivo", "  ", 2000, 90, "Drama");
    assert!(!blank_director.is_valid());
}

#[test]
fn formatted_duration_splits_hours_and_minutes() {
    let mut movie = Movie::new();

    movie.set_duration(135).unwrap();
    assert_eq!(movie.formatted_duration(), "2h 15m");

    movie.set_duration(45).unwrap();
    assert_eq!(movie.formatted_duration(), "45m");

    movie.set_duration(60).unwrap();
    assert_eq!(movie.formatted_duration(), "1h 0m");
}

#[test]
fn movie_serializes_with_stable_field_names() {
    let movie = Movie::with_id(7, "Inception", "Christopher Nolan", 2010, 148, "Ciencia Ficción");

    let json = serde_json::to_value(&movie).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "Inception");
    assert_eq!(json["director"], "Christopher Nolan");
    assert_eq!(json["year"], 2010);
    assert_eq!(json["duration"], 148);
    assert_eq!(json["genre"], "Ciencia Ficción");

    let back: Movie = serde_json::from_value(json).unwrap();
    assert_eq!(back, movie);
}
