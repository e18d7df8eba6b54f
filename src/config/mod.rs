// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for gitacct.
//!
//! Configuration is optional. Without a file, accounts live next to the
//! executable, keys are installed into `~/.ssh` and `git`/`gpg` are resolved
//! from `PATH`.

mod loader;
mod schema;

pub use loader::{find_config_file, load_config, load_config_from, parse_config};
pub use schema::*;
