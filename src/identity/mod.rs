// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Account operations.
//!
//! [`IdentityManager`] ties the account store to the SSH, GPG and git
//! adapters. Import status is recomputed on every query from the SSH
//! directory and the GPG keyring; nothing is cached between calls.

use crate::account::{Account, AccountStore};
use crate::config::GitacctConfig;
use crate::error::{AccountError, Result};
use crate::git::{keys, LocalConfig};
use crate::gpg::Gpg;
use crate::process::ProcessRunner;
use crate::ssh::SshDir;
use std::fmt;
use std::io::Write;

/// Import state of one account directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    /// Settings file missing or unparseable.
    Invalid,
    /// Valid, but keys are not installed.
    NotImported,
    /// Valid and ready to activate.
    Imported,
}

impl AccountStatus {
    /// Tag shown after the account name in listings.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            AccountStatus::Invalid => Some("[NOT VALID]"),
            AccountStatus::NotImported => Some("[NOT IMPORTED]"),
            AccountStatus::Imported => None,
        }
    }
}

/// One row of `account list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEntry {
    pub name: String,
    pub status: AccountStatus,
}

impl fmt::Display for AccountEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status.tag() {
            Some(tag) => write!(f, "{} {}", self.name, tag),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Identity configured in the current repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryIdentity {
    /// `user.name`, if set locally.
    pub user_name: Option<String>,
    /// `user.email`, if set locally.
    pub email: Option<String>,
    /// Account whose name and email match the repository's.
    pub account: Option<String>,
}

/// Runs the account and repository operations.
pub struct IdentityManager<'a> {
    store: AccountStore,
    runner: &'a dyn ProcessRunner,
    config: &'a GitacctConfig,
    ssh_dir: Option<SshDir>,
}

impl<'a> IdentityManager<'a> {
    /// Create a manager from configuration.
    pub fn new(config: &'a GitacctConfig, runner: &'a dyn ProcessRunner) -> Result<Self> {
        let store = AccountStore::new(config.accounts_dir()?);
        tracing::debug!("Using accounts directory {:?}", store.accounts_dir());

        Ok(Self {
            store,
            runner,
            config,
            ssh_dir: None,
        })
    }

    /// Install SSH keys into `ssh_dir` instead of the configured directory.
    pub fn with_ssh_dir(mut self, ssh_dir: SshDir) -> Self {
        self.ssh_dir = Some(ssh_dir);
        self
    }

    /// The underlying account store.
    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    fn ssh_dir(&self) -> Result<SshDir> {
        match self.ssh_dir {
            Some(ref ssh_dir) => Ok(ssh_dir.clone()),
            None => SshDir::resolve(self.config.ssh_dir.as_deref()),
        }
    }

    fn gpg(&self) -> Gpg<'_> {
        Gpg::new(self.runner, &self.config.gpg)
    }

    fn git(&self) -> LocalConfig<'_> {
        LocalConfig::new(self.runner, &self.config.git.program)
    }

    /// Whether the account's SSH pair is installed and its GPG key is in the
    /// keyring. The keyring is only listed when the SSH pair is present.
    pub fn is_account_imported(&self, account: &Account) -> Result<bool> {
        if !self.ssh_dir()?.is_installed(account) {
            return Ok(false);
        }

        self.gpg().has_key(&account.settings.gpg_key)
    }

    /// Creating accounts is not supported; account directories are placed by
    /// hand. Prints where they belong.
    pub fn create_account(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Place account directories (with an {}) into {}",
            crate::account::SETTINGS_FILE,
            self.store.accounts_dir().display()
        )?;
        Ok(())
    }

    /// Classify every account directory. `None` when the accounts directory
    /// does not exist.
    pub fn list_accounts(&self) -> Result<Option<Vec<AccountEntry>>> {
        let Some(names) = self.store.list_account_names()? else {
            return Ok(None);
        };

        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let status = match self.store.load_account(&name) {
                Ok(account) if self.is_account_imported(&account)? => AccountStatus::Imported,
                Ok(_) => AccountStatus::NotImported,
                Err(_) => AccountStatus::Invalid,
            };
            entries.push(AccountEntry { name, status });
        }

        Ok(Some(entries))
    }

    /// Import the account's GPG key into the keyring and copy its SSH pair
    /// into the SSH directory.
    pub fn import_account(&self, name: &str, out: &mut dyn Write) -> Result<Account> {
        let account = self.store.load_account(name)?;

        if self.is_account_imported(&account)? {
            return Err(AccountError::AlreadyImported {
                name: name.to_string(),
            }
            .into());
        }

        // Nothing is touched unless every key file is there.
        if let Some(path) = account.missing_key_file() {
            return Err(AccountError::MissingKeyFile {
                name: name.to_string(),
                path,
            }
            .into());
        }

        let ssh_dir = self.ssh_dir()?;

        writeln!(
            out,
            "Importing account, this may hang for a few seconds whilst importing the gpg key."
        )?;
        out.flush()?;
        self.gpg()
            .import(&account.dir, &account.settings.gpg_file_name)?;

        writeln!(out, "Now importing the ssh keys.")?;
        ssh_dir.install(&account)?;

        tracing::info!("Imported account {}", name);
        Ok(account)
    }

    /// Identity configured in the current repository.
    pub fn repository_identity(&self) -> Result<RepositoryIdentity> {
        let git = self.git();
        let top_level = git.require_repository()?;
        tracing::debug!("Repository top level: {}", top_level);

        let user_name = git.get(keys::USER_NAME)?;
        let email = git.get(keys::USER_EMAIL)?;

        let account = match (&user_name, &email) {
            (Some(user_name), Some(email)) => self.store.find_by_identity(user_name, email)?,
            _ => None,
        };

        Ok(RepositoryIdentity {
            user_name,
            email,
            account,
        })
    }

    /// Activate an imported account on the current repository.
    pub fn set_repository_account(&self, name: &str) -> Result<Account> {
        let account = self.store.load_account(name)?;

        if !self.is_account_imported(&account)? {
            return Err(AccountError::NotImported {
                name: name.to_string(),
            }
            .into());
        }

        let git = self.git();
        git.require_repository()?;

        let ssh_command = self.ssh_dir()?.ssh_command(&account);
        let settings = &account.settings;
        let values = [
            (keys::USER_NAME, settings.name.as_str()),
            (keys::USER_EMAIL, settings.email.as_str()),
            (keys::USER_SIGNING_KEY, settings.gpg_key.as_str()),
            (keys::COMMIT_GPG_SIGN, "true"),
            (keys::CORE_SSH_COMMAND, ssh_command.as_str()),
        ];

        for (key, value) in values {
            git.set(key, value)?;
        }

        tracing::info!("Activated account {}", name);
        Ok(account)
    }
}
