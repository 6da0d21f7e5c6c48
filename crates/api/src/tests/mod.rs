// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the API layer.


use scorebook_domain::{RawCell, RawRow, columns};

use crate::config::AppConfig;

/// The default secret tests verify provisioned credentials against.
pub const TEST_SECRET: &str = "Student123";

/// Low bcrypt cost to keep tests fast.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Builds a test configuration with a cheap hash cost.
pub fn test_config() -> AppConfig {
    AppConfig::new(
        TEST_SECRET.to_string(),
        TEST_BCRYPT_COST,
        "admin".to_string(),
        "password123".to_string(),
    )
}

/// Builds a raw row with the standard score sheet columns.
pub fn score_row(id: &str, name: &str, email: &str, math: f64, science: f64, english: f64) -> RawRow {
    let mut row: RawRow = RawRow::new();
    row.insert(columns::ID, RawCell::Text(id.to_string()));
    row.insert(columns::NAME, RawCell::Text(name.to_string()));
    row.insert(columns::EMAIL, RawCell::Text(email.to_string()));
    row.insert(columns::MATHS, RawCell::Number(math));
    row.insert(columns::SCIENCE, RawCell::Number(science));
    row.insert(columns::ENGLISH, RawCell::Number(english));
    row
}
