//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cartelera_core` linkage and
//!   catalog database connectivity outside the desktop forms.
//! - Keep output deterministic for quick local sanity checks.

use std::path::PathBuf;
use std::process::ExitCode;

use cartelera_core::{ConnectionFactory, DbConfig};

const DB_PATH_ENV: &str = "CARTELERA_DB";
const DEFAULT_DB_FILE: &str = "cartelera.sqlite3";

fn main() -> ExitCode {
    println!("cartelera_core version={}", cartelera_core::core_version());

    let db_path = database_path();
    println!("cartelera_core db_path={}", db_path.display());

    let factory = ConnectionFactory::new(DbConfig::new(&db_path));
    if factory.test_connection() {
        println!("cartelera_core db_check=ok");
        ExitCode::SUCCESS
    } else {
        eprintln!("cartelera_core db_check=failed");
        ExitCode::FAILURE
    }
}

fn database_path() -> PathBuf {
    std::env::var_os(DB_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}
