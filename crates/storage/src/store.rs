// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record store operations
//!
//! Records are appended in id order and never reordered. Deleting a record
//! shifts every later record one slot down and truncates the file, so ids
//! stay ascending by position. Lookups by id are linear scans.

use crate::error::StoreError;
use ledger_core::record::{self, record_offset, RecordBuf};
use ledger_core::{Clock, Description, Event, EventId, SystemClock, RECORD_SIZE};
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, info, warn};

const RECORD_LEN: u64 = RECORD_SIZE as u64;

/// Create a new, empty store at `path`.
///
/// Fails with [`StoreError::AlreadyExists`] if anything already exists there.
pub fn create(path: &Path) -> Result<(), StoreError> {
    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(StoreError::AlreadyExists(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    file.sync_all()?;

    info!(path = %path.display(), "created store");
    Ok(())
}

/// Append an event stamped with the system clock
pub fn append(path: &Path, amount: f64, description: Option<&str>) -> Result<Event, StoreError> {
    append_with_clock(path, amount, description, &SystemClock)
}

/// Append an event, assigning it the id after the last record's (or 0).
///
/// Ids follow the record currently last in the file, so after the last
/// record is deleted its id is handed out again. Ids of records deleted
/// from anywhere else are never reused.
///
/// The record is synced to disk before this returns. If the write fails
/// part way, the file is cut back to its previous length.
pub fn append_with_clock(
    path: &Path,
    amount: f64,
    description: Option<&str>,
    clock: &impl Clock,
) -> Result<Event, StoreError> {
    let description = require_description(description)?;
    require_finite(amount)?;

    let (mut file, len) = open_store(path, true)?;

    let id = match len.checked_sub(RECORD_LEN) {
        Some(last) => read_at(&mut file, last)?
            .id
            .checked_add(1)
            .ok_or_else(|| StoreError::InvalidArgument("event ids exhausted".to_string()))?,
        None => 0,
    };

    let event = Event::new(id, amount, description, clock.now_secs());

    file.seek(SeekFrom::Start(len))?;
    if let Err(e) = file.write_all(&record::encode(&event)) {
        if let Err(trunc) = file.set_len(len) {
            warn!(path = %path.display(), error = %trunc, "failed to roll back partial append");
        }
        return Err(e.into());
    }
    file.sync_all()?;

    info!(path = %path.display(), id, amount, "appended event");
    Ok(event)
}

/// Find the first event with the given id
pub fn read_one(path: &Path, id: EventId) -> Result<Event, StoreError> {
    for event in read_all(path)? {
        let event = event?;
        if event.id == id {
            return Ok(event);
        }
    }
    Err(StoreError::EventNotFound { id })
}

/// Iterate over every event in file order.
///
/// Each call opens its own handle; records are read one at a time.
pub fn read_all(path: &Path) -> Result<EventIter, StoreError> {
    let (file, len) = open_store(path, false)?;
    debug!(path = %path.display(), records = len / RECORD_LEN, "scanning store");

    Ok(EventIter {
        reader: BufReader::new(file),
        remaining: len / RECORD_LEN,
    })
}

/// Sum of every event's amount (0.0 for an empty store)
pub fn balance(path: &Path) -> Result<f64, StoreError> {
    read_all(path)?.try_fold(0.0, |sum, event| event.map(|e| sum + e.amount))
}

/// Remove the event with the given id and return it.
///
/// Later records are moved down one slot at a time through a single
/// record-sized buffer, then the file is truncated by one record.
///
/// Not transactional: an I/O error during the shift leaves the file with
/// a duplicated record and its old length.
pub fn delete(path: &Path, id: EventId) -> Result<Event, StoreError> {
    let (mut file, len) = open_store(path, true)?;
    let count = len / RECORD_LEN;

    let (position, removed) =
        locate(&mut file, count, id)?.ok_or(StoreError::EventNotFound { id })?;

    let mut buf: RecordBuf = [0u8; RECORD_SIZE];
    for next in position + 1..count {
        file.seek(SeekFrom::Start(record_offset(next)))?;
        file.read_exact(&mut buf)?;
        file.seek(SeekFrom::Start(record_offset(next - 1)))?;
        file.write_all(&buf)?;
    }

    file.set_len(len - RECORD_LEN)?;
    file.sync_all()?;

    info!(
        path = %path.display(),
        id,
        position,
        shifted = count - position - 1,
        "deleted event"
    );
    Ok(removed)
}

/// Rewrite the amount and description of the event with the given id.
///
/// The id, creation time and position are preserved; exactly one record
/// is rewritten in place. Returns the updated event.
pub fn update(
    path: &Path,
    id: EventId,
    amount: f64,
    description: Option<&str>,
) -> Result<Event, StoreError> {
    let description = require_description(description)?;
    require_finite(amount)?;

    let (mut file, len) = open_store(path, true)?;

    let (position, mut event) =
        locate(&mut file, len / RECORD_LEN, id)?.ok_or(StoreError::EventNotFound { id })?;

    event.amount = amount;
    event.description = Description::new(description);

    file.seek(SeekFrom::Start(record_offset(position)))?;
    file.write_all(&record::encode(&event))?;
    file.sync_all()?;

    info!(path = %path.display(), id, position, amount, "updated event");
    Ok(event)
}

/// Lazy iterator over the events of a store
pub struct EventIter {
    reader: BufReader<File>,
    remaining: u64,
}

impl Iterator for EventIter {
    type Item = Result<Event, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let mut buf: RecordBuf = [0u8; RECORD_SIZE];
        match self.reader.read_exact(&mut buf) {
            Ok(()) => {
                self.remaining -= 1;
                Some(Ok(record::decode(&buf)))
            }
            Err(e) => {
                // Stop after the first failure
                self.remaining = 0;
                Some(Err(e.into()))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (0, Some(remaining))
    }
}

/// Open an existing store and check that it holds whole records
fn open_store(path: &Path, writable: bool) -> Result<(File, u64), StoreError> {
    let file = OpenOptions::new()
        .read(true)
        .write(writable)
        .open(path)
        .map_err(|e| StoreError::open(path, e))?;

    let metadata = file.metadata()?;
    if !metadata.is_file() {
        return Err(StoreError::InvalidArgument(format!(
            "{} is not a regular file",
            path.display()
        )));
    }

    let len = metadata.len();
    if len % RECORD_LEN != 0 {
        return Err(StoreError::Corrupt {
            path: path.to_path_buf(),
            len,
        });
    }

    Ok((file, len))
}

/// Scan from the start for `id`, returning its slot and event
fn locate(file: &mut File, count: u64, id: EventId) -> Result<Option<(u64, Event)>, StoreError> {
    file.seek(SeekFrom::Start(0))?;
    let mut buf: RecordBuf = [0u8; RECORD_SIZE];

    for position in 0..count {
        file.read_exact(&mut buf)?;
        let event = record::decode(&buf);
        if event.id == id {
            return Ok(Some((position, event)));
        }
    }

    debug!(id, scanned = count, "event not found");
    Ok(None)
}

fn read_at(file: &mut File, offset: u64) -> Result<Event, StoreError> {
    let mut buf: RecordBuf = [0u8; RECORD_SIZE];
    file.seek(SeekFrom::Start(offset))?;
    file.read_exact(&mut buf)?;
    Ok(record::decode(&buf))
}

fn require_description(description: Option<&str>) -> Result<&str, StoreError> {
    description.ok_or_else(|| StoreError::InvalidArgument("description is required".to_string()))
}

fn require_finite(amount: f64) -> Result<(), StoreError> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(StoreError::InvalidArgument(format!(
            "amount must be a finite number, got {amount}"
        )))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
