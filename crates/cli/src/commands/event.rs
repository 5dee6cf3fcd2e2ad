// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ledger add|remove|change|read|readall` - Event commands

use super::FileArgs;
use crate::error::CliError;
use crate::output::{self, OutputFormat};
use clap::Args;
use ledger_core::{Event, EventId};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct AddArgs {
    /// Ledger file
    pub file: PathBuf,

    /// Amount; negative for a debit
    #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
    pub amount: f64,

    /// Description, truncated to 63 bytes
    #[arg(allow_hyphen_values = true)]
    pub description: String,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Ledger file
    pub file: PathBuf,

    /// Id of the event to remove
    pub id: EventId,
}

#[derive(Args)]
pub struct ChangeArgs {
    /// Ledger file
    pub file: PathBuf,

    /// Id of the event to change
    pub id: EventId,

    /// New amount
    #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
    pub amount: f64,

    /// New description, truncated to 63 bytes
    #[arg(allow_hyphen_values = true)]
    pub description: String,
}

#[derive(Args)]
pub struct ReadArgs {
    /// Ledger file
    pub file: PathBuf,

    /// Id of the event to show
    pub id: EventId,
}

/// An event with the action that produced it, for text output
#[derive(Serialize)]
struct Outcome<'a> {
    #[serde(skip)]
    action: &'static str,
    #[serde(flatten)]
    event: &'a Event,
}

impl fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} event {}", self.action, self.event.id)
    }
}

fn parse_amount(s: &str) -> Result<f64, String> {
    let amount: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a decimal number", s))?;
    if !amount.is_finite() {
        return Err(format!("'{}' is not a finite amount", s));
    }
    Ok(amount)
}

pub fn add(args: AddArgs, format: OutputFormat) -> anyhow::Result<()> {
    let event = ledger_storage::append(&args.file, args.amount, Some(&args.description))
        .map_err(|e| CliError::store("add", &args.file, e))?;

    output::print(
        &Outcome {
            action: "Added",
            event: &event,
        },
        format,
    );
    Ok(())
}

pub fn remove(args: RemoveArgs, format: OutputFormat) -> anyhow::Result<()> {
    let event = ledger_storage::delete(&args.file, args.id)
        .map_err(|e| CliError::store(&format!("remove event {}", args.id), &args.file, e))?;

    output::print(
        &Outcome {
            action: "Removed",
            event: &event,
        },
        format,
    );
    Ok(())
}

pub fn change(args: ChangeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let event =
        ledger_storage::update(&args.file, args.id, args.amount, Some(&args.description))
            .map_err(|e| CliError::store(&format!("change event {}", args.id), &args.file, e))?;

    output::print(
        &Outcome {
            action: "Changed",
            event: &event,
        },
        format,
    );
    Ok(())
}

pub fn read(args: ReadArgs, format: OutputFormat) -> anyhow::Result<()> {
    let event = ledger_storage::read_one(&args.file, args.id)
        .map_err(|e| CliError::store(&format!("read event {}", args.id), &args.file, e))?;

    output::print(&event, format);
    Ok(())
}

pub fn read_all(args: FileArgs, format: OutputFormat) -> anyhow::Result<()> {
    let fail = |e| CliError::store("readall", &args.file, e);
    let events = ledger_storage::read_all(&args.file).map_err(fail)?;

    match format {
        OutputFormat::Json => {
            let events = events.collect::<Result<Vec<_>, _>>().map_err(fail)?;
            output::print_list(&events, format);
        }
        OutputFormat::Text => {
            let mut events = events.peekable();
            if events.peek().is_none() {
                println!("No events");
                return Ok(());
            }

            println!(
                "{:<6} {:>12}  {:<40} CREATED",
                "ID", "AMOUNT", "DESCRIPTION"
            );
            for event in events {
                println!("{}", event.map_err(fail)?);
            }
        }
    }
    Ok(())
}
