// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and row normalization for ScoreBook.
//!
//! This crate holds the pure domain model for student score records:
//! identifiers, scores, pass/fail status derivation, and the normalization
//! step that turns a raw spreadsheet row into a validated candidate record.
//! It performs no I/O and knows nothing about spreadsheets, hashing, or
//! databases.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod normalize;
mod types;

pub use error::DomainError;
pub use normalize::{RawCell, RawRow, RowOutcome, columns, normalize_row};
pub use types::{
    CandidateRecord, CredentialedRecord, PASS_THRESHOLD, Scores, Status, StudentId,
};

#[cfg(test)]
mod tests;
