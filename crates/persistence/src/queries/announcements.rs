// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Announcement queries.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::AnnouncementRow;
use crate::diesel_schema::announcements;
use crate::error::PersistenceError;

/// Retrieves the most recent announcements, newest first.
///
/// Ordering uses the autoincrement ID, which is monotonic with creation
/// time and avoids ties between same-second timestamps.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `limit` - The maximum number of announcements to return
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn recent_announcements(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<AnnouncementRow>, PersistenceError> {
    let rows: Vec<AnnouncementRow> = announcements::table
        .order(announcements::announcement_id.desc())
        .limit(limit)
        .load::<AnnouncementRow>(conn)?;

    Ok(rows)
}
