// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository-local git configuration.

use crate::error::{GitError, Result};
use crate::process::{CommandSpec, ProcessRunner};

/// Config keys written when activating an account.
pub mod keys {
    pub const USER_NAME: &str = "user.name";
    pub const USER_EMAIL: &str = "user.email";
    pub const USER_SIGNING_KEY: &str = "user.signingkey";
    pub const COMMIT_GPG_SIGN: &str = "commit.gpgsign";
    pub const CORE_SSH_COMMAND: &str = "core.sshCommand";
}

/// `git` exits with 128 when not run inside a repository.
const EXIT_NOT_A_REPOSITORY: i32 = 128;

/// `git config --get` exits with 1 when the key is not set.
const EXIT_KEY_NOT_SET: i32 = 1;

/// Local config of the repository containing the working directory.
pub struct LocalConfig<'a> {
    runner: &'a dyn ProcessRunner,
    program: &'a str,
}

impl<'a> LocalConfig<'a> {
    /// Create an adapter running `program` as git.
    pub fn new(runner: &'a dyn ProcessRunner, program: &'a str) -> Self {
        Self { runner, program }
    }

    fn command<I, S>(&self, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::new(self.program).args(args)
    }

    /// Top-level directory of the current work tree, `None` outside a
    /// repository.
    pub fn top_level(&self) -> Result<Option<String>> {
        let command = self.command(["rev-parse", "--show-toplevel"]);
        let output = self.runner.capture(&command)?;

        match output.code {
            Some(0) => Ok(output.first_line().map(str::to_string)),
            Some(EXIT_NOT_A_REPOSITORY) => Ok(None),
            code => Err(GitError::UnexpectedExit {
                command: command.to_string(),
                code,
            }
            .into()),
        }
    }

    /// Fail with [`GitError::NotARepository`] outside a work tree.
    pub fn require_repository(&self) -> Result<String> {
        self.top_level()?
            .ok_or_else(|| GitError::NotARepository.into())
    }

    /// Read a local config value. Unset keys and a missing repository both
    /// yield `None`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let command = self.command(["config", "--local", "--get", key]);
        let output = self.runner.capture(&command)?;

        match output.code {
            Some(0) => Ok(output.first_line().map(str::to_string)),
            Some(EXIT_KEY_NOT_SET) | Some(EXIT_NOT_A_REPOSITORY) => Ok(None),
            code => Err(GitError::UnexpectedExit {
                command: command.to_string(),
                code,
            }
            .into()),
        }
    }

    /// Write a local config value.
    ///
    /// The exit status does not affect the caller; a failure is only logged.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let output = self
            .runner
            .capture(&self.command(["config", "--local", key, value]))?;

        if !output.success() {
            tracing::warn!("git config --local {} exited with {:?}", key, output.code);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GitacctError;
    use crate::process::fake::FakeRunner;

    #[test]
    fn test_top_level() {
        let runner = FakeRunner::in_repository("/work/repo");
        let git = LocalConfig::new(&runner, "git");
        assert_eq!(git.top_level().unwrap(), Some("/work/repo".to_string()));
        assert_eq!(git.require_repository().unwrap(), "/work/repo");
    }

    #[test]
    fn test_top_level_outside_repository() {
        let runner = FakeRunner::default();
        let git = LocalConfig::new(&runner, "git");
        assert_eq!(git.top_level().unwrap(), None);
        assert!(matches!(
            git.require_repository(),
            Err(GitacctError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_top_level_unexpected_exit() {
        let runner = FakeRunner::default();
        runner.toplevel_exit.set(Some(129));
        let git = LocalConfig::new(&runner, "git");

        let err = git.top_level().unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("129"));
    }

    #[test]
    fn test_get_and_set() {
        let runner = FakeRunner::in_repository("/work/repo");
        let git = LocalConfig::new(&runner, "git");

        assert_eq!(git.get(keys::USER_NAME).unwrap(), None);
        git.set(keys::USER_NAME, "Jane Doe").unwrap();
        assert_eq!(git.get(keys::USER_NAME).unwrap(), Some("Jane Doe".to_string()));

        let calls = runner.calls.borrow();
        assert_eq!(calls[1].args, vec!["config", "--local", "user.name", "Jane Doe"]);
    }

    #[test]
    fn test_get_outside_repository() {
        let runner = FakeRunner::default();
        let git = LocalConfig::new(&runner, "git");
        assert_eq!(git.get(keys::USER_EMAIL).unwrap(), None);
    }

    #[test]
    fn test_set_ignores_exit_code() {
        let runner = FakeRunner::default();
        let git = LocalConfig::new(&runner, "git");
        assert!(git.set(keys::USER_NAME, "Jane Doe").is_ok());
    }
}
