// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-width description field
//!
//! A description occupies exactly [`DESCRIPTION_CAPACITY`] bytes on disk:
//! the text, then zero bytes up to the end of the field. At least one zero
//! byte is always present, so the text never exceeds `DESCRIPTION_CAPACITY - 1`
//! bytes. Longer input is truncated, never rejected.

use serde::Serialize;
use std::fmt;

/// Width of the on-disk description field, terminator included
pub const DESCRIPTION_CAPACITY: usize = 64;

/// Longest text a description can hold
pub const MAX_DESCRIPTION_LEN: usize = DESCRIPTION_CAPACITY - 1;

/// Description text that is guaranteed to fit its fixed-width field
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Build a description, truncating to [`MAX_DESCRIPTION_LEN`] bytes.
    ///
    /// The cut never splits a UTF-8 character, and text after an embedded
    /// NUL is dropped since the field could not represent it.
    pub fn new(text: &str) -> Self {
        let text = text.find('\0').map_or(text, |nul| &text[..nul]);

        let mut end = text.len().min(MAX_DESCRIPTION_LEN);
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        Self(text[..end].to_string())
    }

    /// Decode a description from its on-disk field.
    ///
    /// Content runs up to the first zero byte. Bytes that are not valid
    /// UTF-8 are replaced, then the usual truncation applies again.
    pub fn from_field(field: &[u8; DESCRIPTION_CAPACITY]) -> Self {
        let len = field.iter().position(|&b| b == 0).unwrap_or(MAX_DESCRIPTION_LEN);
        Self::new(&String::from_utf8_lossy(&field[..len]))
    }

    /// Encode into the on-disk field, zero-padded
    pub fn to_field(&self) -> [u8; DESCRIPTION_CAPACITY] {
        let mut field = [0u8; DESCRIPTION_CAPACITY];
        field[..self.0.len()].copy_from_slice(self.0.as_bytes());
        field
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "description_tests.rs"]
mod tests;
