// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Yukiyama duty roster.
//!
//! This crate provides `SQLite` persistence for the roster's canonical
//! entities: departments, duty types, instructors, certifications, shifts,
//! and shift assignments. It is built on `rusqlite` with the bundled
//! `SQLite` engine, so no external infrastructure is required.
//!
//! ## Backend
//!
//! - In-memory databases are used for unit and integration tests; each
//!   `new_in_memory()` call receives its own isolated database.
//! - File-backed databases are used by the server binary.
//!
//! Foreign key enforcement is verified at construction time; a connection
//! where `PRAGMA foreign_keys` reports disabled is rejected outright.
//!
//! ## Date storage
//!
//! Calendar dates are stored as `TEXT` in `YYYY-MM-DD` form. Formatting and
//! parsing go through the domain crate, and a stored value that fails to
//! parse back surfaces as [`PersistenceError::DataIntegrity`] rather than
//! being silently skipped.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use rusqlite::Connection;
use std::path::Path;

mod error;
mod models;
mod mutations;
mod queries;
mod schema;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use models::{AssignedInstructor, EligibleInstructor, ShiftWithAssignments};

/// Persistence adapter for roster entities.
///
/// All reads and writes go through this adapter. Mutating operations run
/// inside a transaction; reads use plain prepared statements.
pub struct Persistence {
    pub(crate) conn: Connection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a private in-memory database, ensuring
    /// deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open_in_memory()
            .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;
        Self::initialize(conn)
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open(path)
            .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;
        // WAL mode for better read concurrency on file-backed databases.
        conn.execute_batch("PRAGMA journal_mode = WAL;")
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self, PersistenceError> {
        conn.execute_batch(schema::SCHEMA)
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        let mut persistence: Self = Self { conn };
        persistence.verify_foreign_key_enforcement()?;
        Ok(persistence)
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure referential
    /// integrity constraints are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        let enabled: i64 = self
            .conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))?;
        if enabled == 1 {
            Ok(())
        } else {
            Err(PersistenceError::ForeignKeyEnforcementNotEnabled)
        }
    }
}
