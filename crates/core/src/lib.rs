// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ledger-core: Core types for the personal ledger
//!
//! This crate provides:
//! - The `Event` model and its fixed-width description field
//! - The fixed-size binary record codec
//! - A clock abstraction so timestamps are testable

pub mod clock;
pub mod description;
pub mod event;
pub mod record;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use description::{Description, DESCRIPTION_CAPACITY, MAX_DESCRIPTION_LEN};
pub use event::{Event, EventId};
pub use record::{RecordBuf, RECORD_SIZE};
