// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, GitacctError, Result};
use std::path::{Path, PathBuf};

use super::schema::GitacctConfig;

/// Application directory under the user's config directory.
const APP_DIR: &str = "gitacct";

/// Configuration file name.
const CONFIG_FILE: &str = "config.toml";

/// Find the user configuration file, if one exists.
pub fn find_config_file() -> Option<PathBuf> {
    let config_path = dirs::config_dir()?.join(APP_DIR).join(CONFIG_FILE);
    config_path.exists().then_some(config_path)
}

/// Load configuration from the default location.
pub fn load_config() -> Result<GitacctConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(GitacctConfig::default())
        }
    }
}

/// Load configuration from a specific path.
///
/// Relative directories in the file are resolved against the directory the
/// file lives in.
pub fn load_config_from(path: &Path) -> Result<GitacctConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(GitacctError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        GitacctError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    let config = parse_config(&content)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(resolve_paths(config, base))
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<GitacctConfig> {
    let config: GitacctConfig = toml::from_str(content).map_err(|e| {
        GitacctError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &GitacctConfig) -> Result<()> {
    let programs = [
        ("git.program", config.git.program.as_str()),
        ("gpg.program", config.gpg.program.as_str()),
        ("gpg.shell", config.gpg.shell.as_deref().unwrap_or("sh")),
    ];

    for (key, value) in programs {
        if value.trim().is_empty() {
            return Err(GitacctError::Config(ConfigError::InvalidValue {
                key: key.to_string(),
                message: "must not be empty".to_string(),
            }));
        }
    }

    Ok(())
}

fn resolve_paths(mut config: GitacctConfig, base: &Path) -> GitacctConfig {
    let resolve = |dir: PathBuf| {
        if dir.is_relative() {
            base.join(dir)
        } else {
            dir
        }
    };

    config.accounts_dir = config.accounts_dir.map(resolve);
    config.ssh_dir = config.ssh_dir.map(resolve);
    config
}
