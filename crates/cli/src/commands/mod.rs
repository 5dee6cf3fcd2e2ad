// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod account;
pub mod event;

use clap::Args;
use std::path::PathBuf;

/// Arguments for commands that act on a whole ledger file
#[derive(Args)]
pub struct FileArgs {
    /// Ledger file
    pub file: PathBuf,
}
