// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Scripted stand-in for `git` and `gpg` used by unit tests.

use super::{CommandSpec, ProcessOutput, ProcessRunner};
use crate::error::Result;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Emulates the handful of `git`/`gpg` invocations gitacct makes.
///
/// Unknown commands exit with code 2 so a test notices unexpected calls.
#[derive(Debug)]
pub struct FakeRunner {
    /// Lines printed by `gpg -k`.
    pub keyring: RefCell<Vec<String>>,
    /// Exit code of `gpg -k`.
    pub list_exit: Cell<i32>,
    /// Exit code of `gpg --import`.
    pub import_exit: Cell<i32>,
    /// Key id added to the keyring by a successful `gpg --import`.
    pub import_adds_key: RefCell<Option<String>>,
    /// Output of `git rev-parse --show-toplevel`; `None` exits with 128.
    pub toplevel: RefCell<Option<String>>,
    /// Exit code for `git rev-parse` when set, overriding `toplevel`.
    pub toplevel_exit: Cell<Option<i32>>,
    /// The repository's local config.
    pub git_config: RefCell<BTreeMap<String, String>>,
    /// Every command seen, in order.
    pub calls: RefCell<Vec<CommandSpec>>,
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self {
            keyring: RefCell::new(vec![
                "/home/user/.gnupg/pubring.kbx".to_string(),
                "------------------------------".to_string(),
            ]),
            list_exit: Cell::new(0),
            import_exit: Cell::new(0),
            import_adds_key: RefCell::new(None),
            toplevel: RefCell::new(None),
            toplevel_exit: Cell::new(None),
            git_config: RefCell::new(BTreeMap::new()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeRunner {
    /// A runner whose `git` reports a repository at `path`.
    pub fn in_repository(path: &str) -> Self {
        let runner = Self::default();
        *runner.toplevel.borrow_mut() = Some(path.to_string());
        runner
    }

    /// Add a key to the keyring listing, formatted like `gpg -k` output.
    pub fn add_key(&self, key: &str) {
        let mut keyring = self.keyring.borrow_mut();
        keyring.push("pub   ed25519 2024-01-01 [SC]".to_string());
        keyring.push(format!("      {}", key));
        keyring.push(String::new());
    }

    /// Number of commands run so far.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn exit(code: i32, stdout: Vec<String>) -> ProcessOutput {
        ProcessOutput {
            code: Some(code),
            stdout,
        }
    }

    fn respond(&self, command: &CommandSpec) -> ProcessOutput {
        let args: Vec<&str> = command.args.iter().map(String::as_str).collect();

        match args.as_slice() {
            ["-k"] => {
                let code = self.list_exit.get();
                Self::exit(code, self.keyring.borrow().clone())
            }
            ["--import", _] => {
                let code = self.import_exit.get();
                if code == 0 {
                    if let Some(key) = self.import_adds_key.borrow().clone() {
                        self.add_key(&key);
                    }
                }
                Self::exit(code, Vec::new())
            }
            ["rev-parse", "--show-toplevel"] => match self.toplevel_exit.get() {
                Some(code) => Self::exit(code, Vec::new()),
                None => match self.toplevel.borrow().clone() {
                    Some(path) => Self::exit(0, vec![path]),
                    None => Self::exit(128, Vec::new()),
                },
            },
            ["config", "--local", "--get", key] => {
                if self.toplevel.borrow().is_none() {
                    return Self::exit(128, Vec::new());
                }
                match self.git_config.borrow().get(*key) {
                    Some(value) => Self::exit(0, vec![value.clone()]),
                    None => Self::exit(1, Vec::new()),
                }
            }
            ["config", "--local", key, value] => {
                if self.toplevel.borrow().is_none() {
                    return Self::exit(128, Vec::new());
                }
                self.git_config
                    .borrow_mut()
                    .insert(key.to_string(), value.to_string());
                Self::exit(0, Vec::new())
            }
            _ => Self::exit(2, Vec::new()),
        }
    }
}

impl ProcessRunner for FakeRunner {
    fn capture(&self, command: &CommandSpec) -> Result<ProcessOutput> {
        self.calls.borrow_mut().push(command.clone());
        Ok(self.respond(command))
    }

    fn stream(&self, command: &CommandSpec) -> Result<Option<i32>> {
        self.calls.borrow_mut().push(command.clone());
        Ok(self.respond(command).code)
    }
}
