// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::USER_EXIT_CODE;

/// gitacct - switch git identities per repository
///
/// Stores several accounts (name, email, GPG signing key, SSH key), imports
/// their keys and activates one of them in the current repository.
#[derive(Parser, Debug)]
#[command(name = "gitacct")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Switch git identities, signing keys and SSH keys per repository", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage stored accounts
    Account(AccountArgs),

    /// Show or switch the account used by the current repository
    Repository(RepositoryArgs),
}

/// Arguments for the account command.
#[derive(Parser, Debug, Clone)]
pub struct AccountArgs {
    /// Account action to perform
    #[command(subcommand)]
    pub action: AccountAction,
}

/// Account actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AccountAction {
    /// Create a new account (account directories are currently added by hand)
    Create,

    /// List accounts and whether they are imported
    List,

    /// Import an account's GPG and SSH keys
    Import {
        /// Account directory name
        #[arg(value_name = "ACCOUNT")]
        name: String,
    },
}

/// Arguments for the repository command.
#[derive(Parser, Debug, Clone)]
pub struct RepositoryArgs {
    /// Repository action to perform
    #[command(subcommand)]
    pub action: RepositoryAction,
}

/// Repository actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryAction {
    /// Show the identity configured for this repository
    Get,

    /// Use an imported account for this repository
    Set {
        /// Account directory name
        #[arg(value_name = "ACCOUNT")]
        name: String,
    },
}

/// Exit code for a failed parse: help and version displays succeed, every
/// usage error exits with 1.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => USER_EXIT_CODE,
    }
}
