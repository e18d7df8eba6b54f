// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for gitacct.
//!
//! Errors fall into two tiers. User errors (a bad account name, an account
//! that is not imported yet, running outside a repository) are reported as a
//! plain message with exit code 1. Fatal errors indicate a broken host
//! environment, such as a missing home directory or a `git`/`gpg` exit code
//! the tool does not understand, and terminate with [`FATAL_EXIT_CODE`].

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for user and usage errors.
pub const USER_EXIT_CODE: i32 = 1;

/// Exit code for fatal environment errors (`EX_SOFTWARE`).
pub const FATAL_EXIT_CODE: i32 = 70;

/// The main error type for gitacct operations.
#[derive(Error, Debug)]
pub enum GitacctError {
    // Account errors
    #[error("{0}")]
    Account(#[from] AccountError),

    // Git errors
    #[error("{0}")]
    Git(#[from] GitError),

    // GPG errors
    #[error("{0}")]
    Gpg(#[from] GpgError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Subprocess errors
    #[error("Process error: {0}")]
    Process(#[from] ProcessError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch home directory")]
    HomeDirMissing,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl GitacctError {
    /// Whether this error is an environment invariant violation rather than
    /// something the user can fix by changing their input.
    pub fn is_fatal(&self) -> bool {
        match self {
            GitacctError::Account(_) | GitacctError::Config(_) => false,
            GitacctError::Git(err) => !matches!(err, GitError::NotARepository),
            GitacctError::Gpg(err) => !matches!(err, GpgError::ImportFailed { .. }),
            GitacctError::Process(_)
            | GitacctError::Io(_)
            | GitacctError::HomeDirMissing
            | GitacctError::WithContext { .. } => true,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_fatal() {
            FATAL_EXIT_CODE
        } else {
            USER_EXIT_CODE
        }
    }
}

/// Account validation errors.
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Please provide a valid account name, run [account list] to display all accounts.")]
    InvalidName { name: String },

    #[error("Account is missing a settings file, please fix this account before continuing.")]
    MissingSettings { name: String },

    #[error("Account is already imported.")]
    AlreadyImported { name: String },

    #[error("Please import this account first with: [account import {name}].")]
    NotImported { name: String },

    #[error("Account '{name}' is missing the key file {}.", .path.display())]
    MissingKeyFile { name: String, path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("This command only works inside of a git repository.")]
    NotARepository,

    #[error("Unknown exit code for `{command}`: {}", format_code(.code))]
    UnexpectedExit { command: String, code: Option<i32> },
}

/// GPG-related errors.
#[derive(Error, Debug)]
pub enum GpgError {
    #[error("Unexpected error when importing gpg key.")]
    ImportFailed { file: String, code: Option<i32> },

    #[error("Listing of GPG keys failed with exit code {}", format_code(.code))]
    ListingFailed { code: Option<i32> },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Subprocess invocation errors.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to start `{program}`: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

fn format_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

/// Result type alias for gitacct operations.
pub type Result<T> = std::result::Result<T, GitacctError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GitacctError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
