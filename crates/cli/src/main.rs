// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ledger - Personal ledger CLI
//!
//! Exit code 0 on success and for help output; 1 for usage errors and for
//! any failed store operation.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod config;
mod error;
mod logging;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use commands::{account, event, FileArgs};
use std::ffi::OsString;
use std::process::ExitCode;

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

const USAGE_SUMMARY: &str = "\
Commands:
  ledger create <filename>
  ledger add <filename> <amount> <description>
  ledger remove <filename> <eventID>
  ledger change <filename> <eventID> <amount> <description>
  ledger read <filename> <eventID>
  ledger readall <filename>
  ledger balance <filename>
  ledger verify <filename>";

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal ledger stored as fixed-size binary records",
    after_help = USAGE_SUMMARY
)]
struct Cli {
    // Options go before the command; after it, words like `-v` are
    // descriptions.
    /// Output format (defaults to $LEDGER_FORMAT, then text)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new, empty ledger file
    Create(FileArgs),
    /// Append an event
    #[command(disable_help_flag = true)]
    Add(event::AddArgs),
    /// Remove an event by id
    Remove(event::RemoveArgs),
    /// Change an event's amount and description
    #[command(disable_help_flag = true)]
    Change(event::ChangeArgs),
    /// Show one event
    Read(event::ReadArgs),
    /// List every event in file order
    Readall(FileArgs),
    /// Print the sum of all amounts
    Balance(FileArgs),
    /// Check a ledger file for damage
    Verify(FileArgs),
}

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() && is_help_request(&args) => {
            // `help <unknown>` still succeeds, with the full command list
            let _ = err.print();
            let _ = Cli::command().print_help();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // --help, `help` and --version are not failures
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    let config = Config::resolve(cli.format, cli.verbose);
    logging::init(&config);

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) => eprint!("{}", cli_err),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn is_help_request(args: &[OsString]) -> bool {
    args.get(1).is_some_and(|arg| arg == "help")
}

fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    let format = config.format;
    tracing::debug!(?format, filter = %config.log_filter, "resolved config");

    match command {
        Commands::Create(args) => account::create(args, format),
        Commands::Add(args) => event::add(args, format),
        Commands::Remove(args) => event::remove(args, format),
        Commands::Change(args) => event::change(args, format),
        Commands::Read(args) => event::read(args, format),
        Commands::Readall(args) => event::read_all(args, format),
        Commands::Balance(args) => account::balance(args, format),
        Commands::Verify(args) => account::verify(args, format),
    }
}
