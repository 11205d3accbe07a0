//! Orchestration between the forms layer and record access.
//!
//! # Responsibility
//! - Wrap record-access outcomes into `(success, message)` results the
//!   presentation layer can show verbatim.
//! - Keep the presentation layer decoupled from storage details.

pub mod movie_service;
