// ABOUTME: Unified error handling with standard error codes for the plan generator
// ABOUTME: Defines AppError, ErrorCode, and conversions from domain-specific errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Centralized error type shared by every crate in the workspace. Domain
//! errors (`ReferenceDataError`, planner `ConfigError`) convert into
//! `AppError` so callers only ever match on an `ErrorCode`.
//!
//! The plan pipeline itself is designed not to fail on well-formed input;
//! errors here come from the edges: loading reference tables, reading
//! configuration, and validating caller input.

/// Reference table loading errors
pub mod reference;

pub use reference::ReferenceDataError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt::Display;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// The data format is invalid
    InvalidFormat = 3002,
    /// A value lies outside its accepted range
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// The requested resource was not found
    ResourceNotFound = 4000,
    /// The resource exists but cannot be used right now
    ResourceUnavailable = 4003,

    // Configuration (6000-6999)
    /// Generic configuration error
    ConfigError = 6000,
    /// Configuration failed validation
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Reading from storage failed
    StorageError = 9002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceUnavailable => "The resource is currently unavailable",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
        }
    }

    /// Process exit status for command-line front ends
    ///
    /// Follows the BSD `sysexits.h` conventions.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidFormat | Self::ValueOutOfRange => 64,
            Self::ResourceNotFound => 66,
            Self::ResourceUnavailable | Self::StorageError => 74,
            Self::ConfigError | Self::ConfigInvalid => 78,
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Value outside its accepted range
    #[must_use]
    pub fn value_out_of_range(
        field: &str,
        value: impl Display,
        min: impl Display,
        max: impl Display,
    ) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be between {min} and {max}, got {value}"),
        )
    }

    /// Resource present but unusable
    #[must_use]
    pub fn resource_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceUnavailable, message)
    }
}
