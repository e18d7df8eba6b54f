// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! gitacct - switch git identities per repository
//!
//! Manages several developer accounts (name, email, GPG signing key, SSH key)
//! and activates one of them in a repository's local git configuration.
//!
//! # Features
//!
//! - **Account listing**: Shows every account and whether it is valid and imported
//! - **Key import**: Imports an account's GPG key and installs its SSH key pair
//! - **Repository activation**: Writes name, email, signing key and SSH command
//!   into the repository's local config
//!
//! # Example
//!
//! ```no_run
//! use gitacct::config::GitacctConfig;
//! use gitacct::identity::IdentityManager;
//! use gitacct::process::SystemRunner;
//!
//! let config = GitacctConfig::load().unwrap();
//! let manager = IdentityManager::new(&config, &SystemRunner).unwrap();
//!
//! for entry in manager.list_accounts().unwrap().unwrap_or_default() {
//!     println!("{}", entry);
//! }
//! ```

// Module declarations
pub mod account;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod gpg;
pub mod identity;
pub mod process;
pub mod ssh;

// Re-exports for convenience
pub use config::GitacctConfig;
pub use error::{GitacctError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of gitacct.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => format!("{} ({})", VERSION, &sha[..7.min(sha.len())]),
            _ => VERSION.to_string(),
        }
    }

}
