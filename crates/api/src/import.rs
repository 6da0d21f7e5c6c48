// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The bulk import pipeline.
//!
//! Rows flow strictly sequentially through normalize → provision →
//! reconcile; a row's persistence attempt completes before the next row
//! starts, so duplicate identifiers within one file resolve to the last
//! occurrence.
//!
//! Failure policy: the first persistence failure aborts the remaining
//! rows and surfaces as a single error. Earlier upserts stay applied;
//! there is no batch-scoped transaction or compensating rollback. This
//! abort-on-first-error policy is deliberate, not incidental control flow.

use std::path::Path;

use tracing::{debug, info, warn};

use scorebook_domain::{CredentialedRecord, RawRow, RowOutcome, normalize_row};
use scorebook_persistence::SqlitePersistence;

use crate::config::AppConfig;
use crate::credential::CredentialProvisioner;
use crate::error::ApiError;
use crate::spreadsheet;

/// Aggregated outcome of one import batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows upserted into the store.
    pub applied: usize,
    /// Rows omitted because their identifier was empty.
    pub skipped: usize,
}

/// Drives a sequence of raw rows through the import pipeline.
///
/// # Arguments
///
/// * `persistence` - The store handle
/// * `provisioner` - The credential provisioner
/// * `rows` - Raw rows in file order
///
/// # Errors
///
/// Returns the first provisioning or persistence error; remaining rows
/// are not processed and earlier upserts are not undone.
pub fn import_rows(
    persistence: &mut SqlitePersistence,
    provisioner: &CredentialProvisioner,
    rows: &[RawRow],
) -> Result<ImportSummary, ApiError> {
    let mut summary: ImportSummary = ImportSummary::default();

    for row in rows {
        match normalize_row(row) {
            RowOutcome::Skipped => {
                summary.skipped += 1;
            }
            RowOutcome::Record(candidate) => {
                let credentialed: CredentialedRecord = provisioner.provision(candidate)?;
                persistence.upsert_student(&credentialed)?;
                summary.applied += 1;
            }
        }
    }

    debug!(
        applied = summary.applied,
        skipped = summary.skipped,
        "Import batch reconciled"
    );

    Ok(summary)
}

/// Imports an uploaded spreadsheet file and releases it on success.
///
/// Parses the first sheet, drives every row through the pipeline, and
/// deletes the temporary uploaded file once the whole batch has been
/// applied. On failure the file is left in place.
///
/// # Arguments
///
/// * `persistence` - The store handle
/// * `config` - The injected service configuration
/// * `path` - The path to the temporary uploaded file
///
/// # Errors
///
/// Returns a spreadsheet error if the content cannot be decoded (no rows
/// are processed in that case), the first row-level error otherwise, or
/// an internal error if the processed file cannot be removed.
pub fn import_spreadsheet(
    persistence: &mut SqlitePersistence,
    config: &AppConfig,
    path: &Path,
) -> Result<ImportSummary, ApiError> {
    let rows: Vec<RawRow> = spreadsheet::read_first_sheet(path)?;

    let provisioner: CredentialProvisioner = CredentialProvisioner::from_config(config);
    let summary: ImportSummary = import_rows(persistence, &provisioner, &rows)?;

    if let Err(e) = std::fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "Failed to remove uploaded file");
        return Err(ApiError::Internal {
            message: format!("Failed to remove uploaded file: {e}"),
        });
    }

    info!(
        applied = summary.applied,
        skipped = summary.skipped,
        "Import completed"
    );

    Ok(summary)
}
