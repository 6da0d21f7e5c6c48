// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application operations for ScoreBook.
//!
//! This crate sits between the HTTP server and the persistence layer. It
//! owns the bulk import pipeline (spreadsheet decoding, row normalization
//! dispatch, credential provisioning, reconciliation) and the simple
//! single-record operations: student and admin login, record search, and
//! announcements.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use tracing::{debug, info};

use scorebook_domain::StudentId;
use scorebook_persistence::{AnnouncementRow, SqlitePersistence, StudentRow, verify_password};

mod config;
mod credential;
mod error;
pub mod import;
pub mod spreadsheet;

pub use config::AppConfig;
pub use credential::CredentialProvisioner;
pub use error::ApiError;
pub use import::{ImportSummary, import_rows, import_spreadsheet};

/// Maximum number of results returned by a record search.
pub const SEARCH_LIMIT: i64 = 5;

/// Maximum number of announcements returned by the recent listing.
pub const ANNOUNCEMENT_LIMIT: i64 = 3;

/// Authenticates a student by identifier and password.
///
/// The identifier is trimmed the same way the import pipeline trims it,
/// then the password is verified against the stored bcrypt hash.
///
/// # Arguments
///
/// * `persistence` - The store handle
/// * `student_id` - The claimed student identifier
/// * `password` - The plain-text password to verify
///
/// # Returns
///
/// The student's stored record on success.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` for an unknown identifier or
/// a password mismatch; the reason does not distinguish the two.
pub fn student_login(
    persistence: &mut SqlitePersistence,
    student_id: &str,
    password: &str,
) -> Result<StudentRow, ApiError> {
    let id: StudentId = StudentId::new(student_id);

    let failed = || ApiError::AuthenticationFailed {
        reason: String::from("Invalid ID or Password"),
    };

    let row: StudentRow = persistence
        .get_student(id.value())?
        .ok_or_else(failed)?;

    if !verify_password(password, &row.password_hash)? {
        debug!(student_id = %id, "Student password mismatch");
        return Err(failed());
    }

    info!(student_id = %id, "Student authenticated");

    Ok(row)
}

/// Authenticates an administrator against the configured credential.
///
/// The admin credential is injected via [`AppConfig`] rather than being a
/// literal in the handler.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` on mismatch.
pub fn admin_login(config: &AppConfig, user: &str, password: &str) -> Result<(), ApiError> {
    if user == config.admin_user && password == config.admin_password {
        info!(user, "Administrator authenticated");
        Ok(())
    } else {
        Err(ApiError::AuthenticationFailed {
            reason: String::from("Invalid admin credentials"),
        })
    }
}

/// Searches student records by name or identifier substring.
///
/// Results are bounded to [`SEARCH_LIMIT`] rows.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn search_students(
    persistence: &mut SqlitePersistence,
    query: &str,
) -> Result<Vec<StudentRow>, ApiError> {
    Ok(persistence.search_students(query, SEARCH_LIMIT)?)
}

/// Posts a new announcement.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for empty text, or an error if the
/// insert fails.
pub fn post_announcement(
    persistence: &mut SqlitePersistence,
    text: &str,
) -> Result<i64, ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("text"),
            message: String::from("Announcement text cannot be empty"),
        });
    }

    Ok(persistence.create_announcement(text)?)
}

/// Retrieves the most recent announcements, newest first.
///
/// Bounded to [`ANNOUNCEMENT_LIMIT`] entries.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn recent_announcements(
    persistence: &mut SqlitePersistence,
) -> Result<Vec<AnnouncementRow>, ApiError> {
    Ok(persistence.recent_announcements(ANNOUNCEMENT_LIMIT)?)
}

#[cfg(test)]
mod tests;
