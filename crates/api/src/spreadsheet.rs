// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Spreadsheet decoding for bulk score imports.
//!
//! Decodes an uploaded spreadsheet file into an ordered sequence of raw
//! row mappings from the first sheet only. The format is auto-detected
//! (xlsx/xls/ods). Header names are trimmed of surrounding whitespace so
//! the observed `"Science "` trailing-space column resolves to `Science`;
//! cell lookups are otherwise exact and case-sensitive.

use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use tracing::debug;

use scorebook_domain::{RawCell, RawRow};

use crate::error::ApiError;

/// Converts one spreadsheet cell into a raw cell, if it carries a value.
///
/// Empty and error cells surface as absent, not as errors.
fn convert_cell(cell: &Data) -> Option<RawCell> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            Some(RawCell::Text(s.clone()))
        }
        Data::Float(f) => Some(RawCell::Number(*f)),
        #[allow(clippy::cast_precision_loss)]
        Data::Int(i) => Some(RawCell::Number(*i as f64)),
        Data::Bool(b) => Some(RawCell::Bool(*b)),
        Data::DateTime(dt) => Some(RawCell::Number(dt.as_f64())),
    }
}

/// Reads the first sheet of a spreadsheet file into raw row mappings.
///
/// The first row is the header row. Row order is preserved. Absent
/// columns simply do not appear in a row's mapping.
///
/// # Arguments
///
/// * `path` - The path to the uploaded spreadsheet file
///
/// # Errors
///
/// Returns `ApiError::SpreadsheetUnreadable` if the file cannot be decoded
/// as a spreadsheet or the workbook has no sheets.
pub fn read_first_sheet(path: &Path) -> Result<Vec<RawRow>, ApiError> {
    let mut workbook: Sheets<_> =
        open_workbook_auto(path).map_err(|e| ApiError::SpreadsheetUnreadable {
            reason: e.to_string(),
        })?;

    let range: Range<Data> = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ApiError::SpreadsheetUnreadable {
            reason: String::from("Workbook contains no sheets"),
        })?
        .map_err(|e| ApiError::SpreadsheetUnreadable {
            reason: e.to_string(),
        })?;

    let mut row_iter = range.rows();

    let Some(header_cells) = row_iter.next() else {
        debug!("First sheet is empty");
        return Ok(Vec::new());
    };

    // Trimmed header names, positionally aligned with the data cells.
    let headers: Vec<String> = header_cells
        .iter()
        .map(|cell| match cell {
            Data::String(s) => s.trim().to_string(),
            other => convert_cell(other).map(|c| c.as_text()).unwrap_or_default(),
        })
        .collect();

    let mut rows: Vec<RawRow> = Vec::new();
    for data_cells in row_iter {
        let mut row: RawRow = RawRow::new();
        for (idx, cell) in data_cells.iter().enumerate() {
            let Some(header) = headers.get(idx) else {
                continue;
            };
            if header.is_empty() {
                continue;
            }
            if let Some(raw) = convert_cell(cell) {
                row.insert(header, raw);
            }
        }
        rows.push(row);
    }

    debug!(row_count = rows.len(), "Decoded first sheet");

    Ok(rows)
}
