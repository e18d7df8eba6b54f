// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-account settings file (`account.toml`).

use serde::{Deserialize, Deserializer, Serialize};

/// Name of the settings file inside an account directory.
pub const SETTINGS_FILE: &str = "account.toml";

/// Identity and key references for one account.
///
/// ```toml
/// Name = "Jane Doe"
/// Email = "jane@example.com"
/// GpgKey = "3AA5C34371567BD2"
/// SshFileName = "id_ed25519"
/// GpgFileName = "private.asc"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountSettings {
    /// Value for git `user.name`.
    pub name: String,
    /// Value for git `user.email`.
    pub email: String,
    /// GPG key id, used for `user.signingkey` and to find the key in the keyring.
    #[serde(deserialize_with = "non_empty")]
    pub gpg_key: String,
    /// Base filename of the SSH key pair (`<file>` and `<file>.pub`).
    #[serde(deserialize_with = "non_empty")]
    pub ssh_file_name: String,
    /// Filename of the exported GPG key material.
    #[serde(deserialize_with = "non_empty")]
    pub gpg_file_name: String,
}

/// An empty key id would match every keyring line.
fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.trim().is_empty() {
        return Err(serde::de::Error::custom("must not be empty"));
    }
    Ok(value)
}

impl AccountSettings {
    /// Parse settings from TOML.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
