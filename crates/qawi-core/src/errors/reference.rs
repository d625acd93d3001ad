// ABOUTME: Reference table error types for meal and exercise data loading
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reference Data Error Types
//!
//! Errors raised while loading the meal and exercise tables from storage.
//! Each variant carries the path of the offending file so operators can
//! find the broken table without turning on debug logging.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::{AppError, ErrorCode};

/// Errors specific to reference table loading.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    /// The table file could not be opened or read
    #[error("Failed to read {table} table at {}: {source}", .path.display())]
    Io {
        /// Table name (`meals` or `exercises`)
        table: &'static str,
        /// Path of the file that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
    /// A row could not be parsed into a reference record
    #[error("Malformed {table} table at {}: {message}", .path.display())]
    Malformed {
        /// Table name (`meals` or `exercises`)
        table: &'static str,
        /// Path of the file that failed
        path: PathBuf,
        /// Parser message including the offending line
        message: String,
    },
    /// The table contains no rows but at least one is required
    #[error("The {table} table is empty; at least one row is required")]
    EmptyTable {
        /// Table name (`meals` or `exercises`)
        table: &'static str,
    },
}

impl ReferenceDataError {
    /// Name of the table the error refers to
    #[must_use]
    pub const fn table(&self) -> &'static str {
        match self {
            Self::Io { table, .. } | Self::Malformed { table, .. } | Self::EmptyTable { table } => {
                table
            }
        }
    }
}

impl From<ReferenceDataError> for AppError {
    fn from(error: ReferenceDataError) -> Self {
        let code = match &error {
            ReferenceDataError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ErrorCode::ResourceNotFound
            }
            ReferenceDataError::Io { .. } => ErrorCode::StorageError,
            ReferenceDataError::Malformed { .. } => ErrorCode::InvalidFormat,
            ReferenceDataError::EmptyTable { .. } => ErrorCode::ResourceUnavailable,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
