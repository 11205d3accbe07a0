//! Domain model for the movie catalog.
//!
//! # Responsibility
//! - Define the catalog record shared by every form of the application.
//! - Keep field invariants enforced at assignment time, not at save time.
//!
//! # Invariants
//! - Every field mutation goes through a validating setter; constructors
//!   perform no checks so form binding can fill fields one at a time.

pub mod movie;
