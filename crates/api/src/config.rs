// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Injected configuration for the ScoreBook service.
//!
//! The default secret, hash work factor, and admin credential live here
//! rather than as literals scattered through the pipeline. One config
//! instance is constructed at startup and passed into each component.

/// The default secret assigned to every imported record before hashing.
const DEFAULT_SECRET: &str = "Student123";

/// The default bcrypt work factor for provisioned credentials.
const DEFAULT_BCRYPT_COST: u32 = 10;

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// The fixed initial credential value assigned to every imported
    /// record before hashing. Configured once for the whole subsystem.
    pub default_secret: String,
    /// Work factor controlling the expense of the one-way hash.
    pub bcrypt_cost: u32,
    /// The administrator login name.
    pub admin_user: String,
    /// The administrator password.
    pub admin_password: String,
}

impl AppConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub const fn new(
        default_secret: String,
        bcrypt_cost: u32,
        admin_user: String,
        admin_password: String,
    ) -> Self {
        Self {
            default_secret,
            bcrypt_cost,
            admin_user,
            admin_password,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_secret: String::from(DEFAULT_SECRET),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            admin_user: String::from("admin"),
            admin_password: String::from("password123"),
        }
    }
}
