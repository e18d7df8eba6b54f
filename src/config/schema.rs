// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures that can be loaded from `config.toml`.

use crate::error::{GitacctError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name of the accounts folder next to the executable.
pub const ACCOUNTS_DIR_NAME: &str = "accounts";

/// The main configuration structure for gitacct.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GitacctConfig {
    /// Directory holding one subdirectory per account.
    ///
    /// Defaults to `accounts/` next to the executable.
    pub accounts_dir: Option<PathBuf>,

    /// Directory the SSH keys are installed into. Defaults to `~/.ssh`.
    pub ssh_dir: Option<PathBuf>,

    /// Git invocation.
    pub git: GitConfig,

    /// GPG invocation.
    pub gpg: GpgConfig,
}

impl GitacctConfig {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Resolve the accounts directory.
    pub fn accounts_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.accounts_dir {
            return Ok(dir.clone());
        }

        let exe = std::env::current_exe()?;
        let base = exe.parent().ok_or_else(|| GitacctError::WithContext {
            context: "accounts directory".to_string(),
            message: format!("{} has no parent directory", exe.display()),
        })?;
        Ok(base.join(ACCOUNTS_DIR_NAME))
    }
}

/// Git configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GitConfig {
    /// Git executable.
    pub program: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
        }
    }
}

/// GPG configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GpgConfig {
    /// GPG executable.
    pub program: String,

    /// Shell to run GPG through (`<shell> -c "gpg ..."`), for setups where
    /// GPG only works inside a particular shell environment.
    pub shell: Option<String>,
}

impl Default for GpgConfig {
    fn default() -> Self {
        Self {
            program: "gpg".to_string(),
            shell: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GitacctConfig::default();
        assert_eq!(config.git.program, "git");
        assert_eq!(config.gpg.program, "gpg");
        assert!(config.gpg.shell.is_none());
        assert!(config.ssh_dir.is_none());
    }

    #[test]
    fn test_accounts_dir_next_to_executable() {
        let config = GitacctConfig::default();
        let dir = config.accounts_dir().unwrap();
        assert!(dir.ends_with(ACCOUNTS_DIR_NAME));

        let exe = std::env::current_exe().unwrap();
        assert_eq!(dir.parent(), exe.parent());
    }

    #[test]
    fn test_accounts_dir_override() {
        let config = GitacctConfig {
            accounts_dir: Some(PathBuf::from("/srv/accounts")),
            ..Default::default()
        };
        assert_eq!(config.accounts_dir().unwrap(), PathBuf::from("/srv/accounts"));
    }
}
