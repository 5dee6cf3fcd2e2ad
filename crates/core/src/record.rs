// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-size binary record codec
//!
//! Every event is stored as exactly [`RECORD_SIZE`] bytes, with no file
//! header. Fields use host byte order:
//!
//! | Offset | Size | Field         |
//! |--------|------|---------------|
//! | 0      | 8    | `amount` f64  |
//! | 8      | 64   | `description` |
//! | 72     | 8    | `created_at` i64 |
//! | 80     | 8    | `id` u64      |

use crate::description::{Description, DESCRIPTION_CAPACITY};
use crate::event::Event;

const AMOUNT_AT: usize = 0;
const DESCRIPTION_AT: usize = AMOUNT_AT + 8;
const CREATED_AT_AT: usize = DESCRIPTION_AT + DESCRIPTION_CAPACITY;
const ID_AT: usize = CREATED_AT_AT + 8;

/// Size in bytes of one serialized event
pub const RECORD_SIZE: usize = ID_AT + 8;

/// Raw bytes of one record
pub type RecordBuf = [u8; RECORD_SIZE];

/// Serialize an event into its fixed-size record
pub fn encode(event: &Event) -> RecordBuf {
    let mut buf = [0u8; RECORD_SIZE];
    buf[AMOUNT_AT..DESCRIPTION_AT].copy_from_slice(&event.amount.to_ne_bytes());
    buf[DESCRIPTION_AT..CREATED_AT_AT].copy_from_slice(&event.description.to_field());
    buf[CREATED_AT_AT..ID_AT].copy_from_slice(&event.created_at.to_ne_bytes());
    buf[ID_AT..].copy_from_slice(&event.id.to_ne_bytes());
    buf
}

/// Deserialize an event from its fixed-size record
pub fn decode(buf: &RecordBuf) -> Event {
    Event {
        id: u64::from_ne_bytes(field(buf, ID_AT)),
        amount: f64::from_ne_bytes(field(buf, AMOUNT_AT)),
        description: Description::from_field(&field(buf, DESCRIPTION_AT)),
        created_at: i64::from_ne_bytes(field(buf, CREATED_AT_AT)),
    }
}

/// Byte offset of the record at `position` (zero-based slot index)
pub fn record_offset(position: u64) -> u64 {
    position * RECORD_SIZE as u64
}

fn field<const N: usize>(buf: &RecordBuf, at: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&buf[at..at + N]);
    out
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
