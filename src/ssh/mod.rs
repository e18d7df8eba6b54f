// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! SSH key installation.
//!
//! An account's key pair is installed into the SSH directory as
//! `<SshFileName>_<account>` and `<SshFileName>_<account>.pub`, so several
//! accounts can share the same key file name.

use crate::account::Account;
use crate::error::{AccountError, GitacctError, Result, ResultExt};
use crate::process::shell_quote;
use std::fs;
use std::path::{Path, PathBuf};

/// The directory SSH keys are installed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshDir {
    path: PathBuf,
    /// Whether `path` is the default `~/.ssh`, spelled with a tilde in
    /// `core.sshCommand`.
    is_default: bool,
}

impl SshDir {
    /// `~/.ssh` of the current user.
    pub fn home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(GitacctError::HomeDirMissing)?;
        Ok(Self::in_home(&home))
    }

    /// The `.ssh` directory of `home`, referred to as `~/.ssh`.
    pub fn in_home(home: &Path) -> Self {
        Self {
            path: home.join(".ssh"),
            is_default: true,
        }
    }

    /// An explicitly configured directory.
    pub fn custom(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_default: false,
        }
    }

    /// Resolve from an optional configured directory.
    pub fn resolve(configured: Option<&Path>) -> Result<Self> {
        match configured {
            Some(path) => Ok(Self::custom(path)),
            None => Self::home(),
        }
    }

    /// The directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the installed private key.
    pub fn key_name(account: &Account) -> String {
        format!("{}_{}", account.settings.ssh_file_name, account.name)
    }

    /// Installed private key path.
    pub fn private_key(&self, account: &Account) -> PathBuf {
        self.path.join(Self::key_name(account))
    }

    /// Installed public key path.
    pub fn public_key(&self, account: &Account) -> PathBuf {
        self.path.join(format!("{}.pub", Self::key_name(account)))
    }

    /// Whether both halves of the key pair are installed.
    pub fn is_installed(&self, account: &Account) -> bool {
        let private = self.private_key(account);
        let public = self.public_key(account);
        tracing::debug!("Checking for {:?} and {:?}", private, public);

        private.is_file() && public.is_file()
    }

    /// The `core.sshCommand` value selecting this account's key. Git runs it
    /// through a shell, so the key path is quoted.
    pub fn ssh_command(&self, account: &Account) -> String {
        if self.is_default {
            format!("ssh -i ~/.ssh/{}", shell_quote(&Self::key_name(account)))
        } else {
            format!(
                "ssh -i {}",
                shell_quote(&self.private_key(account).to_string_lossy())
            )
        }
    }

    /// Copy the account's key pair into the SSH directory, overwriting any
    /// existing files.
    pub fn install(&self, account: &Account) -> Result<()> {
        let sources = [account.ssh_private_key(), account.ssh_public_key()];
        if let Some(missing) = sources.iter().find(|path| !path.is_file()) {
            return Err(AccountError::MissingKeyFile {
                name: account.name.clone(),
                path: missing.clone(),
            }
            .into());
        }

        fs::create_dir_all(&self.path)
            .context(format!("Failed to create {}", self.path.display()))?;

        let targets = [self.private_key(account), self.public_key(account)];
        for (source, target) in sources.iter().zip(&targets) {
            tracing::debug!("Copying {:?} to {:?}", source, target);
            fs::copy(source, target).context(format!(
                "Failed to copy {} to {}",
                source.display(),
                target.display()
            ))?;
        }

        restrict_permissions(&targets[0])
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .context(format!("Failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
