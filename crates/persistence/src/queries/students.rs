// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student record queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::StudentRow;
use crate::diesel_schema::students;
use crate::error::PersistenceError;

/// Retrieves a student record by identifier.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `student_id` - The unique student identifier
///
/// # Returns
///
/// `Some(StudentRow)` if the student exists, `None` otherwise.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_student(
    conn: &mut SqliteConnection,
    student_id: &str,
) -> Result<Option<StudentRow>, PersistenceError> {
    let row: Option<StudentRow> = students::table
        .filter(students::student_id.eq(student_id))
        .first::<StudentRow>(conn)
        .optional()?;

    Ok(row)
}

/// Searches student records by name or identifier substring.
///
/// Matching uses SQL `LIKE`, which is case-insensitive for ASCII in
/// `SQLite`. Results are bounded by `limit`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `query` - The substring to match against name or student ID
/// * `limit` - The maximum number of rows to return
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn search_students(
    conn: &mut SqliteConnection,
    query: &str,
    limit: i64,
) -> Result<Vec<StudentRow>, PersistenceError> {
    let pattern: String = format!("%{query}%");

    debug!(query, limit, "Searching student records");

    let rows: Vec<StudentRow> = students::table
        .filter(
            students::name
                .like(&pattern)
                .or(students::student_id.like(&pattern)),
        )
        .order(students::student_id.asc())
        .limit(limit)
        .load::<StudentRow>(conn)?;

    Ok(rows)
}

/// Counts all student records.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_students(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(students::table.count().get_result(conn)?)
}

/// Verifies a plain-text password against a stored hash.
///
/// This is a backend-agnostic utility function that uses bcrypt.
///
/// # Arguments
///
/// * `password` - The plain-text password to check
/// * `password_hash` - The stored bcrypt hash
///
/// # Errors
///
/// Returns an error if hash verification fails to execute.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}
