// FIXCAP - fixcap-error
// Module: Error Handling
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling library for the fixcap workspace.
//!
//! Provides the categorized `Error` type shared by every fixcap crate,
//! together with the numbered error codes and helper constructors for the
//! common failure cases.
//!
//! # Error Categories
//!
//! Errors are organized into categories, each with its own range of codes:
//!
//! - Foundation errors (1000-1099): bounded-container misuse detected at
//!   run time (capacity exceeded, out-of-bounds access through fallible
//!   APIs).
//! - Platform errors (2000-2099): process-identity retrieval failures.
//! - Runtime errors (3000-3099): application lifecycle failures.
//!
//! # Usage
//!
//! ```
//! use fixcap_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Platform,
//!     codes::PROCESS_NAME_RETRIEVAL_FAILED,
//!     "Could not read process name",
//! );
//! assert!(error.is_platform_error());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Standard library support
#[cfg(any(feature = "std", test))]
extern crate std;

/// Error codes for fixcap
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Helper constructors for common errors
pub mod helpers;
/// Commonly used imports
pub mod prelude;

// Re-export key types
pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for fixcap operations.
///
/// This type alias uses `fixcap_error::Error` as the error type and is
/// suitable for `no_std` environments.
pub type Result<T> = core::result::Result<T, Error>;
