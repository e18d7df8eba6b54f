// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GPG keyring access through the `gpg` executable.

use crate::config::GpgConfig;
use crate::error::{GpgError, Result};
use crate::process::{CommandSpec, ProcessRunner};
use std::path::Path;

/// Runs `gpg`, directly or through a configured shell.
pub struct Gpg<'a> {
    runner: &'a dyn ProcessRunner,
    config: &'a GpgConfig,
}

impl<'a> Gpg<'a> {
    /// Create a GPG adapter.
    pub fn new(runner: &'a dyn ProcessRunner, config: &'a GpgConfig) -> Self {
        Self { runner, config }
    }

    fn command<I, S>(&self, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::new(&self.config.program).args(args)
    }

    fn finish(&self, command: CommandSpec) -> CommandSpec {
        match self.config.shell {
            Some(ref shell) => command.via_shell(shell),
            None => command,
        }
    }

    /// Import key material from `file`, resolved relative to `dir`.
    ///
    /// GPG's output goes straight to the terminal; it may prompt for a
    /// passphrase.
    pub fn import(&self, dir: &Path, file: &str) -> Result<()> {
        let command = self.finish(self.command(["--import", file]).current_dir(dir));
        let code = self.runner.stream(&command)?;

        if code != Some(0) {
            return Err(GpgError::ImportFailed {
                file: file.to_string(),
                code,
            }
            .into());
        }

        Ok(())
    }

    /// Whether `key` occurs in the public keyring listing.
    pub fn has_key(&self, key: &str) -> Result<bool> {
        let output = self.runner.capture(&self.finish(self.command(["-k"])))?;

        if !output.success() {
            return Err(GpgError::ListingFailed { code: output.code }.into());
        }

        let found = output.stdout.iter().any(|line| line.contains(key));
        tracing::debug!("GPG key {} present: {}", key, found);
        Ok(found)
    }
}
