// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Account definitions.
//!
//! Each account is a directory under the accounts directory holding an
//! `account.toml` plus the key files it references. gitacct only reads these
//! directories; they are created by hand.

mod settings;
pub(crate) mod store;

pub use settings::{AccountSettings, SETTINGS_FILE};
pub use store::{Account, AccountStore};
