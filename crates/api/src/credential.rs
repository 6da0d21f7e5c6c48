// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Default credential provisioning for imported records.

use scorebook_domain::{CandidateRecord, CredentialedRecord};

use crate::config::AppConfig;
use crate::error::ApiError;

/// Provisions a hashed default credential for candidate records.
///
/// The provisioner applies uniformly to new and pre-existing identifiers;
/// it cannot tell them apart. Every import recomputes the hash, so any
/// previously issued or user-changed credential is destroyed by re-import.
/// That reset is an intentional behavioral property of bulk provisioning,
/// not an accident of implementation.
#[derive(Debug, Clone)]
pub struct CredentialProvisioner {
    default_secret: String,
    cost: u32,
}

impl CredentialProvisioner {
    /// Creates a provisioner from the injected configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            default_secret: config.default_secret.clone(),
            cost: config.bcrypt_cost,
        }
    }

    /// Attaches a fresh salted hash of the default secret to a record.
    ///
    /// Each call produces a distinct hash value because bcrypt salts are
    /// random, even when the secret and cost are unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails (e.g., an out-of-range cost).
    pub fn provision(&self, record: CandidateRecord) -> Result<CredentialedRecord, ApiError> {
        let password_hash: String =
            bcrypt::hash(&self.default_secret, self.cost).map_err(|e| ApiError::Internal {
                message: format!("Failed to hash default secret: {e}"),
            })?;

        Ok(CredentialedRecord::new(record, password_hash))
    }
}
