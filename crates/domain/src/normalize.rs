// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row normalization for bulk score imports.
//!
//! One raw row mapping in, one [`RowOutcome`] out. Normalization is a pure
//! function with documented defaulting rules: bad score values coerce to 0
//! silently, and rows with an empty identifier are skipped rather than
//! treated as errors. Imported sheets are messy by nature; tolerating them
//! here keeps the batch alive.

use std::collections::HashMap;

use crate::types::{CandidateRecord, Scores, StudentId};

/// Column names recognized in uploaded score sheets.
///
/// Lookups are exact and case-sensitive after the parser has trimmed header
/// whitespace (the observed sheets carry a `"Science "` trailing-space
/// variant).
pub mod columns {
    /// The student identifier column.
    pub const ID: &str = "ID";
    /// The student name column.
    pub const NAME: &str = "Name";
    /// The student email column.
    pub const EMAIL: &str = "Email";
    /// The maths score column.
    pub const MATHS: &str = "Maths";
    /// The science score column.
    pub const SCIENCE: &str = "Science";
    /// The english score column.
    pub const ENGLISH: &str = "English";
}

/// A single cell value from a raw spreadsheet row.
///
/// Absent columns do not appear in the row at all, so there is no explicit
/// empty variant for missing cells.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// A textual cell.
    Text(String),
    /// A numeric cell.
    Number(f64),
    /// A boolean cell.
    Bool(bool),
}

impl RawCell {
    /// Coerces this cell to a string.
    ///
    /// Whole-valued numbers render without a trailing `.0` so a numeric
    /// identifier cell like `123.0` becomes `"123"`.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    #[allow(clippy::cast_possible_truncation)]
                    let whole: i64 = *n as i64;
                    whole.to_string()
                } else {
                    n.to_string()
                }
            }
            Self::Bool(b) => b.to_string(),
        }
    }

    /// Coerces this cell to a number, if possible.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        }
    }
}

/// One raw row mapping (column name → cell value) from a score sheet.
///
/// Column presence is not guaranteed; absent columns surface as absent
/// entries, never as errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, RawCell>,
}

impl RawRow {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Sets a cell value for a column.
    pub fn insert(&mut self, column: &str, cell: RawCell) {
        self.cells.insert(column.to_string(), cell);
    }

    /// Returns the cell for a column, if present.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&RawCell> {
        self.cells.get(column)
    }

    /// Returns true if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The outcome of normalizing a single raw row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// The row produced a validated candidate record.
    Record(CandidateRecord),
    /// The row had an empty identifier and is omitted from the batch.
    /// This is not an error and must not abort the import.
    Skipped,
}

/// Extracts a score cell, defaulting missing or non-numeric values to 0.
fn score_field(row: &RawRow, column: &str) -> f64 {
    row.get(column).and_then(RawCell::as_number).unwrap_or(0.0)
}

/// Extracts an optional text field, defaulting to the empty string.
fn text_field(row: &RawRow, column: &str) -> String {
    row.get(column).map(RawCell::as_text).unwrap_or_default()
}

/// Normalizes one raw row into a candidate record, or signals a skip.
///
/// Policy:
/// 1. The `ID` cell is coerced to a string and trimmed; an empty result
///    skips the row.
/// 2. The three score cells coerce to numbers, defaulting to 0.
/// 3. Status derives from the unrounded average against the inclusive
///    pass threshold.
/// 4. `Name` and `Email` carry through verbatim, empty when absent.
///
/// No side effects.
#[must_use]
pub fn normalize_row(row: &RawRow) -> RowOutcome {
    let student_id: StudentId = StudentId::new(&text_field(row, columns::ID));
    if student_id.is_empty() {
        return RowOutcome::Skipped;
    }

    let scores: Scores = Scores::new(
        score_field(row, columns::MATHS),
        score_field(row, columns::SCIENCE),
        score_field(row, columns::ENGLISH),
    );

    let name: String = text_field(row, columns::NAME);
    let email: String = text_field(row, columns::EMAIL);

    RowOutcome::Record(CandidateRecord::new(student_id, name, email, scores))
}
