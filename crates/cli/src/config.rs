// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration resolved from flags and the environment

use crate::output::OutputFormat;
use clap::ValueEnum;

/// Environment variable selecting the default output format
pub const FORMAT_ENV: &str = "LEDGER_FORMAT";

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "LEDGER_LOG";

/// Settings for one CLI invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub log_filter: String,
}

impl Config {
    /// Resolve from command-line flags, falling back to the environment
    pub fn resolve(format: Option<OutputFormat>, verbose: bool) -> Self {
        Self::from_parts(
            format,
            verbose,
            std::env::var(FORMAT_ENV).ok(),
            std::env::var(LOG_ENV).ok(),
        )
    }

    /// Flags win over the environment; unknown formats fall back to text
    pub fn from_parts(
        format: Option<OutputFormat>,
        verbose: bool,
        env_format: Option<String>,
        env_log: Option<String>,
    ) -> Self {
        let format = format
            .or_else(|| env_format.and_then(|v| OutputFormat::from_str(&v, true).ok()))
            .unwrap_or(OutputFormat::Text);

        let log_filter = env_log.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| {
            if verbose {
                "debug".to_string()
            } else {
                "warn".to_string()
            }
        });

        Self { format, log_filter }
    }
}
