// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for gitacct.
//!
//! This module handles command-line argument parsing and command dispatch.

pub mod args;
mod dispatch;

pub use args::{usage_exit_code, Cli, Commands};
pub use dispatch::run;
