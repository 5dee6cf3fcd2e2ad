// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! The first line names the failed operation and its input. Context lines
//! and numbered suggestions follow when there is something useful to add.

use ledger_storage::{StoreError, Verification};
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl CliError {
    /// Wrap a store failure for `operation` on the ledger at `path`.
    pub fn store(operation: &str, path: &Path, err: StoreError) -> Self {
        let file = path.display();
        let base = CliError::new(format!("{} failed on {}: {}", operation, file, err));

        let err_with_hints = match &err {
            StoreError::AlreadyExists(_) => base
                .with_suggestion("Choose a different file name")
                .with_suggestion(format!("Inspect the existing ledger: ledger readall {}", file)),
            StoreError::StoreNotFound(_) => {
                base.with_suggestion(format!("Create the ledger first: ledger create {}", file))
            }
            StoreError::EventNotFound { .. } => {
                base.with_suggestion(format!("List event ids: ledger readall {}", file))
            }
            StoreError::Corrupt { .. } => base
                .with_context("The file does not hold a whole number of records")
                .with_context("It may not be a ledger file, or a write was interrupted")
                .with_suggestion(format!("Inspect the damage: ledger verify {}", file)),
            StoreError::Io(_) => base
                .with_context("The operating system rejected the file operation")
                .with_suggestion("Check the file's permissions and free disk space"),
            StoreError::InvalidArgument(_) => base,
        };

        err_with_hints.with_source(err)
    }

    /// Error for a ledger that failed verification.
    pub fn verification_failed(path: &Path, report: &Verification) -> Self {
        let mut err = CliError::new(format!("verify failed on {}", path.display()));

        if report.trailing_bytes > 0 {
            err = err.with_context(format!(
                "{} trailing bytes after the last whole record",
                report.trailing_bytes
            ));
        }
        if !report.duplicates.is_empty() {
            err = err
                .with_context(format!("Duplicate ids: {:?}", report.duplicates))
                .with_context("A remove may have been interrupted while shifting records");
        }
        if !report.out_of_order.is_empty() {
            err = err.with_context(format!(
                "{} records are out of id order",
                report.out_of_order.len()
            ));
        }

        err.with_suggestion("Restore the ledger from a backup")
    }
}
