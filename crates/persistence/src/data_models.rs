// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;

/// A student record row as stored in the `students` table.
///
/// Field order matches the table column order for `Queryable`.
#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct StudentRow {
    /// The unique student identifier.
    pub student_id: String,
    /// The student's name (empty string when never supplied).
    pub name: String,
    /// The student's email (empty string when never supplied).
    pub email: String,
    /// Bcrypt hash of the current credential. Never clear text.
    pub password_hash: String,
    /// Maths score.
    pub math: f64,
    /// Science score.
    pub science: f64,
    /// English score.
    pub english: f64,
    /// Derived pass/fail status as stored.
    pub status: String,
}

/// An announcement row as stored in the `announcements` table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct AnnouncementRow {
    /// The autoincrement announcement ID.
    pub announcement_id: i64,
    /// The announcement text.
    pub text: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}
