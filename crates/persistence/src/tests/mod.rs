// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use scorebook_domain::{CandidateRecord, CredentialedRecord, Scores, StudentId};

/// Bcrypt cost used in tests. The minimum keeps hashing fast.
pub const TEST_BCRYPT_COST: u32 = 4;

/// The default secret used by test records.
pub const TEST_SECRET: &str = "Student123";

pub fn create_test_record(student_id: &str, name: &str, scores: Scores) -> CredentialedRecord {
    let candidate: CandidateRecord = CandidateRecord::new(
        StudentId::new(student_id),
        name.to_string(),
        format!("{}@example.edu", student_id.trim()),
        scores,
    );
    let password_hash: String =
        bcrypt::hash(TEST_SECRET, TEST_BCRYPT_COST).expect("Failed to hash test secret");
    CredentialedRecord::new(candidate, password_hash)
}
