// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Subprocess execution.
//!
//! Every `git` and `gpg` invocation goes through [`ProcessRunner`], so the
//! adapters can be exercised against a scripted runner instead of the real
//! binaries. Calls block until the child exits; there is no timeout.

#[cfg(test)]
pub(crate) mod fake;

use crate::error::{ProcessError, Result};
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A command line to run, with an optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program to execute, resolved through `PATH` when not absolute.
    pub program: String,
    /// Arguments, passed verbatim.
    pub args: Vec<String>,
    /// Working directory for the child.
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a command for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Wrap this command in `shell -c '<command line>'`.
    pub fn via_shell(self, shell: &str) -> Self {
        let line = std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            program: shell.to_string(),
            args: vec!["-c".to_string(), line],
            cwd: self.cwd,
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Quote a word for a POSIX shell. Plain words are left untouched.
pub fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+%,".contains(c));

    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Result of a captured run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` if the child was killed by a signal.
    pub code: Option<i32>,
    /// Standard output split into lines.
    pub stdout: Vec<String>,
}

impl ProcessOutput {
    /// Whether the child exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// The first stdout line, if any.
    pub fn first_line(&self) -> Option<&str> {
        self.stdout.first().map(String::as_str)
    }
}

/// Capability to run external programs to completion.
pub trait ProcessRunner {
    /// Run a command, capturing stdout. Stderr is inherited.
    fn capture(&self, command: &CommandSpec) -> Result<ProcessOutput>;

    /// Run a command with all stdio inherited so its output reaches the user
    /// live. Returns the exit code.
    fn stream(&self, command: &CommandSpec) -> Result<Option<i32>>;
}

/// Runs commands on the host with [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn build(command: &CommandSpec) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(ref cwd) = command.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    fn spawn_error(command: &CommandSpec, source: std::io::Error) -> ProcessError {
        ProcessError::SpawnFailed {
            program: command.program.clone(),
            source,
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn capture(&self, command: &CommandSpec) -> Result<ProcessOutput> {
        tracing::debug!("Running (captured): {}", command);

        let output = Self::build(command)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| Self::spawn_error(command, e))?;

        // gpg prints user ids in whatever encoding they were created with
        let stdout: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect();

        tracing::debug!(
            "`{}` exited with {:?} ({} stdout lines)",
            command.program,
            output.status.code(),
            stdout.len()
        );

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout,
        })
    }

    fn stream(&self, command: &CommandSpec) -> Result<Option<i32>> {
        tracing::debug!("Running (streamed): {}", command);

        let status = Self::build(command)
            .status()
            .map_err(|e| Self::spawn_error(command, e))?;

        tracing::debug!("`{}` exited with {:?}", command.program, status.code());
        Ok(status.code())
    }
}
