// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ledger events

use crate::description::Description;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Identifier of an event within one store
pub type EventId = u64;

/// A single financial event: positive amounts are credits, negative debits.
///
/// `id` and `created_at` are fixed when the event is appended; only the
/// amount and description change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: EventId,
    pub amount: f64,
    pub description: Description,
    /// Seconds since the Unix epoch
    pub created_at: i64,
}

impl Event {
    pub fn new(
        id: EventId,
        amount: f64,
        description: impl Into<Description>,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            amount,
            description: description.into(),
            created_at,
        }
    }

    /// Creation time as a UTC datetime, if it is representable
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6} {:>12}  {:<40} ",
            self.id,
            self.amount,
            format!("\"{}\"", self.description)
        )?;
        match self.created_at_utc() {
            Some(at) => write!(f, "{}", at.format("%Y-%m-%d %H:%M:%S UTC")),
            None => write!(f, "@{}", self.created_at),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
