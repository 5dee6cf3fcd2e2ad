// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ledger create|balance|verify` - Whole-ledger commands

use super::FileArgs;
use crate::error::CliError;
use crate::output::{self, OutputFormat};
use ledger_core::EventId;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
struct Created {
    created: String,
}

impl fmt::Display for Created {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Created ledger {}", self.created)
    }
}

#[derive(Serialize)]
struct Balance {
    file: String,
    balance: f64,
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.balance)
    }
}

#[derive(Serialize)]
struct VerifyReport {
    file: String,
    ok: bool,
    records: u64,
    last_id: Option<EventId>,
    trailing_bytes: u64,
    out_of_order: Vec<(u64, EventId)>,
    duplicates: Vec<EventId>,
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.ok { "ok" } else { "damaged" };
        writeln!(f, "Ledger: {} ({})", self.file, status)?;
        write!(f, "  Records: {}", self.records)?;
        if let Some(id) = self.last_id {
            write!(f, "\n  Last id: {}", id)?;
        }
        if self.trailing_bytes > 0 {
            write!(f, "\n  Trailing bytes: {}", self.trailing_bytes)?;
        }
        for (position, id) in &self.out_of_order {
            write!(f, "\n  Out of order: id {} at position {}", id, position)?;
        }
        for id in &self.duplicates {
            write!(f, "\n  Duplicate: id {}", id)?;
        }
        Ok(())
    }
}

pub fn create(args: FileArgs, format: OutputFormat) -> anyhow::Result<()> {
    ledger_storage::create(&args.file).map_err(|e| CliError::store("create", &args.file, e))?;

    output::print(
        &Created {
            created: args.file.display().to_string(),
        },
        format,
    );
    Ok(())
}

pub fn balance(args: FileArgs, format: OutputFormat) -> anyhow::Result<()> {
    let balance =
        ledger_storage::balance(&args.file).map_err(|e| CliError::store("balance", &args.file, e))?;

    output::print(
        &Balance {
            file: args.file.display().to_string(),
            balance,
        },
        format,
    );
    Ok(())
}

pub fn verify(args: FileArgs, format: OutputFormat) -> anyhow::Result<()> {
    let report =
        ledger_storage::verify(&args.file).map_err(|e| CliError::store("verify", &args.file, e))?;

    output::print(
        &VerifyReport {
            file: args.file.display().to_string(),
            ok: report.is_ok(),
            records: report.records,
            last_id: report.last_id,
            trailing_bytes: report.trailing_bytes,
            out_of_order: report.out_of_order.clone(),
            duplicates: report.duplicates.clone(),
        },
        format,
    );

    if !report.is_ok() {
        return Err(CliError::verification_failed(&args.file, &report).into());
    }
    Ok(())
}
