// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The average-score cutoff separating `Pass` from `Fail`.
///
/// The boundary is inclusive: an average of exactly 40.0 passes.
pub const PASS_THRESHOLD: f64 = 40.0;

/// The unique external key for a student record.
///
/// Surrounding whitespace is stripped on construction, so `" 123 "` and
/// `"123"` identify the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(String);

impl StudentId {
    /// Creates a student identifier, trimming surrounding whitespace.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns true if the trimmed identifier is empty.
    ///
    /// Rows with empty identifiers are skipped during import.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pass/fail status derived from a record's average score.
///
/// Status is never independently settable; it is always computed from the
/// scores at the moment a record is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Average score at or above [`PASS_THRESHOLD`].
    Pass,
    /// Average score below [`PASS_THRESHOLD`].
    Fail,
}

impl Status {
    /// Derives the status from an average score.
    #[must_use]
    pub fn from_average(average: f64) -> Self {
        if average >= PASS_THRESHOLD {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

impl FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pass" => Ok(Self::Pass),
            "Fail" => Ok(Self::Fail),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three subject scores carried by a student record.
///
/// Missing or non-numeric spreadsheet cells default to 0 before any
/// averaging, so these fields are always concrete values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Maths score.
    pub math: f64,
    /// Science score.
    pub science: f64,
    /// English score.
    pub english: f64,
}

impl Scores {
    /// Creates a new score triple.
    #[must_use]
    pub const fn new(math: f64, science: f64, english: f64) -> Self {
        Self {
            math,
            science,
            english,
        }
    }

    /// Computes the unrounded average of the three scores.
    #[must_use]
    pub fn average(&self) -> f64 {
        (self.math + self.science + self.english) / 3.0
    }
}

/// A normalized candidate record produced from one raw spreadsheet row.
///
/// The status field is derived from the scores at construction and cannot
/// be set independently.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRecord {
    /// The unique student identifier.
    pub student_id: StudentId,
    /// The student's name (empty string when the column is absent).
    pub name: String,
    /// The student's email (empty string when the column is absent).
    pub email: String,
    /// The subject scores.
    pub scores: Scores,
    status: Status,
}

impl CandidateRecord {
    /// Creates a candidate record, deriving pass/fail status from the scores.
    #[must_use]
    pub fn new(student_id: StudentId, name: String, email: String, scores: Scores) -> Self {
        let status: Status = Status::from_average(scores.average());
        Self {
            student_id,
            name,
            email,
            scores,
            status,
        }
    }

    /// Returns the derived pass/fail status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }
}

/// A candidate record augmented with a freshly provisioned credential hash.
///
/// Every import produces a new hash of the configured default secret, even
/// for records that already exist with a previously issued credential.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialedRecord {
    /// The normalized candidate record.
    pub record: CandidateRecord,
    /// One-way salted hash of the default secret. Never clear text.
    pub password_hash: String,
}

impl CredentialedRecord {
    /// Attaches a credential hash to a candidate record.
    #[must_use]
    pub const fn new(record: CandidateRecord, password_hash: String) -> Self {
        Self {
            record,
            password_hash,
        }
    }
}
