// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads and writes repository-local configuration by running `git`.

mod config;

pub use config::{keys, LocalConfig};
