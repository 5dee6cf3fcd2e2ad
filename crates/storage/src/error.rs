// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record store errors

use ledger_core::{EventId, RECORD_SIZE};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur in record store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("store not found: {}", .0.display())]
    StoreNotFound(PathBuf),
    #[error("event not found: {id}")]
    EventNotFound { id: EventId },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(
        "corrupted store {}: length {len} is not a multiple of {}",
        path.display(),
        RECORD_SIZE
    )]
    Corrupt { path: PathBuf, len: u64 },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Coarse failure reason shared by every store operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    InvalidArgument,
    Io,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            StoreError::StoreNotFound(_) | StoreError::EventNotFound { .. } => ErrorKind::NotFound,
            StoreError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            StoreError::Corrupt { .. } | StoreError::Io(_) => ErrorKind::Io,
        }
    }

    /// Classify a failure to open an existing store
    pub(crate) fn open(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            StoreError::StoreNotFound(path.to_path_buf())
        } else {
            StoreError::Io(err)
        }
    }
}
