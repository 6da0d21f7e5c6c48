// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for ScoreBook.
//!
//! This crate provides `SQLite` persistence for student score records and
//! announcements. It is built on Diesel with embedded migrations.
//!
//! The student upsert in `mutations::students` is the reconciliation point
//! of the bulk import pipeline: records are keyed by `student_id` and
//! overwritten wholesale on conflict.
//!
//! ## Testing
//!
//! `new_in_memory()` hands out a unique shared in-memory database per call
//! so tests are isolated and deterministic. File-backed databases run in
//! WAL mode for better read concurrency.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use scorebook_domain::CredentialedRecord;

pub mod backend;
pub mod data_models;
mod diesel_schema;
mod error;
pub mod mutations;
pub mod queries;

pub use data_models::{AnnouncementRow, StudentRow};
pub use error::PersistenceError;
pub use queries::students::verify_password;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID so tests
/// are isolated without time-based collisions.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter over a `SQLite` connection.
///
/// This is the explicit store handle passed into the API layer at
/// construction; there is no global connection state.
pub struct SqlitePersistence {
    conn: SqliteConnection,
}

impl SqlitePersistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared in-memory database instance via
    /// an atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("scorebook_memdb_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::open_database(&shared_memory_url)?;

        Ok(Self { conn })
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
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::open_database(path_str)?;
        backend::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Students
    // ========================================================================

    /// Upserts a student record keyed by `student_id`.
    ///
    /// All fields are overwritten wholesale if the record already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected.
    pub fn upsert_student(&mut self, record: &CredentialedRecord) -> Result<(), PersistenceError> {
        mutations::students::upsert_student(&mut self.conn, record)
    }

    /// Retrieves a student record by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_student(&mut self, student_id: &str) -> Result<Option<StudentRow>, PersistenceError> {
        queries::students::get_student(&mut self.conn, student_id)
    }

    /// Searches student records by name or identifier substring.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search_students(
        &mut self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<StudentRow>, PersistenceError> {
        queries::students::search_students(&mut self.conn, query, limit)
    }

    /// Counts all student records.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_students(&mut self) -> Result<i64, PersistenceError> {
        queries::students::count_students(&mut self.conn)
    }

    // ========================================================================
    // Announcements
    // ========================================================================

    /// Creates a new announcement and returns its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_announcement(&mut self, text: &str) -> Result<i64, PersistenceError> {
        mutations::announcements::create_announcement(&mut self.conn, text)
    }

    /// Retrieves the most recent announcements, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent_announcements(
        &mut self,
        limit: i64,
    ) -> Result<Vec<AnnouncementRow>, PersistenceError> {
        queries::announcements::recent_announcements(&mut self.conn, limit)
    }
}

#[cfg(test)]
mod tests;
