// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::{style, Term};

use crate::config::GitacctConfig;
use crate::error::Result;
use crate::identity::{AccountStatus, IdentityManager};
use crate::process::SystemRunner;

use super::args::{AccountAction, Cli, Commands, RepositoryAction};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        GitacctConfig::load_from(config_path)?
    } else {
        GitacctConfig::load()?
    };

    let runner = SystemRunner;
    let manager = IdentityManager::new(&config, &runner)?;

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Account(args) => run_account(&manager, args.action),
        Commands::Repository(args) => run_repository(&manager, args.action),
    }
}

/// Run an account subcommand.
fn run_account(manager: &IdentityManager<'_>, action: AccountAction) -> Result<()> {
    tracing::debug!("Running account command: {:?}", action);

    let mut term = Term::stdout();

    match action {
        AccountAction::Create => manager.create_account(&mut term),
        AccountAction::List => {
            let Some(entries) = manager.list_accounts()? else {
                term.write_line(
                    "No accounts exist. Please create some or place some into the account directory.",
                )?;
                return Ok(());
            };

            term.write_line("Accounts: ")?;
            for entry in entries {
                let line = match entry.status {
                    AccountStatus::Imported => entry.name,
                    AccountStatus::NotImported => {
                        format!("{} {}", entry.name, style("[NOT IMPORTED]").yellow())
                    }
                    AccountStatus::Invalid => {
                        format!("{} {}", entry.name, style("[NOT VALID]").red())
                    }
                };
                term.write_line(&line)?;
            }
            Ok(())
        }
        AccountAction::Import { name } => {
            manager.import_account(&name, &mut term)?;
            term.write_line(&format!(
                "{} Successfully imported account.",
                style("✓").green().bold()
            ))?;
            Ok(())
        }
    }
}

/// Run a repository subcommand.
fn run_repository(manager: &IdentityManager<'_>, action: RepositoryAction) -> Result<()> {
    tracing::debug!("Running repository command: {:?}", action);

    let term = Term::stdout();

    match action {
        RepositoryAction::Get => {
            let identity = manager.repository_identity()?;
            let unset = || "(not set)".to_string();

            term.write_line(&format!(
                "Currently logged in as {} - {}",
                identity.user_name.unwrap_or_else(unset),
                identity.email.unwrap_or_else(unset)
            ))?;
            if let Some(account) = identity.account {
                term.write_line(&format!("Account: {}", style(account).cyan()))?;
            }
            Ok(())
        }
        RepositoryAction::Set { name } => {
            let account = manager.set_repository_account(&name)?;
            term.write_line(&format!(
                "{} Repository now uses {} ({} <{}>)",
                style("✓").green().bold(),
                style(&account.name).cyan(),
                account.settings.name,
                account.settings.email
            ))?;
            Ok(())
        }
    }
}
