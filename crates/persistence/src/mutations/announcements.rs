// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Announcement mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::OffsetDateTime;
use tracing::info;

use crate::backend;
use crate::diesel_schema::announcements;
use crate::error::PersistenceError;

/// Creates a new announcement with the current UTC timestamp.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `text` - The announcement text
///
/// # Returns
///
/// The announcement ID assigned by the database.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_announcement(
    conn: &mut SqliteConnection,
    text: &str,
) -> Result<i64, PersistenceError> {
    let created_at: String = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))?;

    diesel::insert_into(announcements::table)
        .values((
            announcements::text.eq(text),
            announcements::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let announcement_id: i64 = backend::last_insert_rowid(conn)?;

    info!(announcement_id, "Created announcement");

    Ok(announcement_id)
}
