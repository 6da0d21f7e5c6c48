// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store bootstrap.
//!
//! Opens `SQLite` connections and brings the schema up to date from the
//! embedded migrations. The schema is two flat tables (`students` keyed by
//! identifier, `announcements` keyed by rowid) with no cross-table
//! references, so bootstrap is connection + migrations and nothing else.
//! The two raw-SQL helpers here exist because Diesel has no DSL for
//! `last_insert_rowid()` or PRAGMA statements.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::error::PersistenceError;

/// Schema migrations compiled into the binary.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Opens a connection to the given URL and applies pending migrations.
///
/// The URL may be a file path or a shared-memory URL; re-opening an
/// existing database is a no-op for already-applied migrations.
///
/// # Arguments
///
/// * `database_url` - The `SQLite` database URL (shared-memory URL or file path)
///
/// # Errors
///
/// Returns an error if the connection cannot be established or a
/// migration fails to apply.
pub fn open_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Opening ScoreBook store");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Returns the rowid assigned by the most recent insert on this connection.
///
/// Announcement IDs come from here: `SQLite` does not support `RETURNING`
/// in all contexts, so the insert and the ID read are two statements.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Switches a file-backed database to write-ahead logging.
///
/// WAL mode keeps readers unblocked while an import batch is writing. It
/// is a property of the database file, not the connection, so shared
/// in-memory databases skip this.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}
