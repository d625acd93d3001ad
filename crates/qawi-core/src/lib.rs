// ABOUTME: Core types and constants for the Khaleek Qawi plan generator
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Qawi Core
//!
//! Foundation crate providing shared types and constants for the Khaleek Qawi
//! plan generator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Energy densities, input limits, and fixed plan text
//! - **models**: Client profile, reference table rows, diet keys, and the generated plan

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`ClientProfile`, `ReferenceMeal`, `GeneratedPlan`, etc.)
pub mod models;
