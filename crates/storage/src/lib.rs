// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ledger-storage: Binary record store for ledger events
//!
//! A store is a flat file of fixed-size records. Every operation takes the
//! file path, opens it, makes one pass, syncs and closes. Nothing is cached
//! between calls.
//!
//! There is no locking: two processes mutating the same store at once can
//! lose updates or tear records.

mod error;
mod store;
mod verify;

pub use error::{ErrorKind, StoreError};
pub use store::{
    append, append_with_clock, balance, create, delete, read_all, read_one, update, EventIter,
};
pub use verify::{verify, Verification};
