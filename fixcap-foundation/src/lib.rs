// FIXCAP - fixcap-foundation
// Module: Library Root
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Foundation library for the fixcap workspace.
//!
//! The central type is [`BoundedArray`], a value-semantic fixed-capacity
//! container whose capacity is part of its type. Checked element access
//! reports bounds failures through the process-wide violation protocol in
//! [`violation`] instead of returning an error: a detected out-of-range
//! access is treated as unrecoverable and terminates the process after one
//! diagnostic line.
//!
//! ```
//! use fixcap_foundation::BoundedArray;
//!
//! let values = BoundedArray::<u32, 5>::from_partial([10, 20, 30]);
//! assert_eq!(values.len(), 5);
//! assert_eq!(values.as_slice(), &[10, 20, 30, 0, 0]);
//! assert_eq!(*values.at(2), 30);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Fixed-capacity array container
pub mod array;
/// Commonly used imports
pub mod prelude;
/// Violation protocol for checked-access failures
pub mod violation;

// Re-export key types
pub use array::{swap, BoundedArray};
pub use violation::{
    install_reporter, ArrayAccessViolation, FatalReporter, ViolationReporter,
};
