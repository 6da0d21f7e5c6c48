// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student record mutations.
//!
//! The upsert here is the reconciliation point of the import pipeline:
//! one credentialed record in, one row written, keyed by `student_id`.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use scorebook_domain::CredentialedRecord;

use crate::diesel_schema::students;
use crate::error::PersistenceError;

/// Upserts a student record keyed by `student_id`.
///
/// If a record with the same identifier exists, all fields (name, email,
/// password hash, scores, status) are overwritten wholesale; otherwise a
/// new record is inserted. The operation is a single SQL statement and is
/// atomic at single-record granularity.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `record` - The credentialed, normalized record to write
///
/// # Errors
///
/// Returns an error if the write is rejected. The caller decides batch
/// policy; no retry happens here.
pub fn upsert_student(
    conn: &mut SqliteConnection,
    record: &CredentialedRecord,
) -> Result<(), PersistenceError> {
    let candidate = &record.record;
    let status_str: &str = candidate.status().as_str();

    debug!(
        student_id = %candidate.student_id,
        status = status_str,
        "Upserting student record"
    );

    diesel::insert_into(students::table)
        .values((
            students::student_id.eq(candidate.student_id.value()),
            students::name.eq(&candidate.name),
            students::email.eq(&candidate.email),
            students::password_hash.eq(&record.password_hash),
            students::math.eq(candidate.scores.math),
            students::science.eq(candidate.scores.science),
            students::english.eq(candidate.scores.english),
            students::status.eq(status_str),
        ))
        .on_conflict(students::student_id)
        .do_update()
        .set((
            students::name.eq(&candidate.name),
            students::email.eq(&candidate.email),
            students::password_hash.eq(&record.password_hash),
            students::math.eq(candidate.scores.math),
            students::science.eq(candidate.scores.science),
            students::english.eq(candidate.scores.english),
            students::status.eq(status_str),
        ))
        .execute(conn)?;

    Ok(())
}
