// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only store validation

use crate::error::StoreError;
use ledger_core::record::{self, RecordBuf};
use ledger_core::{EventId, RECORD_SIZE};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::warn;

/// Result of scanning a store for format violations
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Number of whole records in the file
    pub records: u64,
    /// Id of the last whole record, which the next append builds on
    pub last_id: Option<EventId>,
    /// Bytes after the last whole record
    pub trailing_bytes: u64,
    /// `(position, id)` of records whose id is not above the previous one
    pub out_of_order: Vec<(u64, EventId)>,
    /// Ids that appear more than once
    pub duplicates: Vec<EventId>,
}

impl Verification {
    pub fn is_ok(&self) -> bool {
        self.trailing_bytes == 0 && self.out_of_order.is_empty() && self.duplicates.is_empty()
    }
}

/// Scan a store without modifying it.
///
/// Unlike the other operations this accepts a file whose length is not a
/// whole number of records, so the damage can be reported.
pub fn verify(path: &Path) -> Result<Verification, StoreError> {
    let file = File::open(path).map_err(|e| StoreError::open(path, e))?;
    let len = file.metadata()?.len();
    let record_len = RECORD_SIZE as u64;

    let mut report = Verification {
        records: len / record_len,
        trailing_bytes: len % record_len,
        ..Verification::default()
    };

    let mut reader = BufReader::new(file);
    let mut seen = BTreeSet::new();
    let mut buf: RecordBuf = [0u8; RECORD_SIZE];

    for position in 0..report.records {
        reader.read_exact(&mut buf)?;
        let id = record::decode(&buf).id;

        if report.last_id.is_some_and(|prev| id <= prev) {
            report.out_of_order.push((position, id));
        }
        if !seen.insert(id) && !report.duplicates.contains(&id) {
            report.duplicates.push(id);
        }
        report.last_id = Some(id);
    }

    if report.trailing_bytes > 0 {
        warn!(path = %path.display(), bytes = report.trailing_bytes, "trailing partial record");
    }
    for (position, id) in &report.out_of_order {
        warn!(path = %path.display(), position, id, "id out of order");
    }
    for id in &report.duplicates {
        warn!(path = %path.display(), id, "duplicate id");
    }

    Ok(report)
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
