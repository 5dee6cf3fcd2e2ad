// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Size of one on-disk record
pub const RECORD_SIZE: u64 = 88;

/// A scratch directory holding one ledger path.
/// The directory is removed when dropped.
pub struct TestLedger {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestLedger {
    /// A ledger path that does not exist yet
    pub fn uncreated() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("acct.dat");
        Self { dir, path }
    }

    /// A freshly created, empty ledger
    pub fn new() -> Self {
        let ledger = Self::uncreated();
        ledger.run(&["create"]).assert().success();
        ledger
    }

    /// `ledger <command> <path> <rest...>`
    pub fn run(&self, args: &[&str]) -> Command {
        self.run_with(&[], args)
    }

    /// `ledger <options...> <command> <path> <rest...>`
    pub fn run_with(&self, options: &[&str], args: &[&str]) -> Command {
        let mut cmd = ledger();
        cmd.args(options)
            .arg(args[0])
            .arg(&self.path)
            .args(&args[1..]);
        cmd
    }

    /// Every event as parsed `--format json` output
    pub fn events(&self) -> serde_json::Value {
        let output = self
            .run_with(&["--format", "json"], &["readall"])
            .output()
            .expect("Failed to run readall");
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).expect("readall printed invalid JSON")
    }

    pub fn add(&self, amount: &str, description: &str) {
        self.run(&["add", amount, description]).assert().success();
    }

    pub fn len(&self) -> u64 {
        std::fs::metadata(&self.path)
            .expect("Failed to stat ledger")
            .len()
    }
}

/// The ledger binary with a clean environment
pub fn ledger() -> Command {
    let mut cmd = Command::cargo_bin("ledger").expect("ledger binary not built");
    cmd.env_remove("LEDGER_FORMAT").env_remove("LEDGER_LOG");
    cmd
}
