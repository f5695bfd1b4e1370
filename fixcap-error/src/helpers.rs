// FIXCAP - fixcap-error
// Module: Error Helpers
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Helper constructors for common error patterns.

use crate::{codes, Error, ErrorCategory};

/// Create a bounded-container capacity exceeded error
#[must_use]
pub const fn capacity_exceeded_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Foundation, codes::CAPACITY_EXCEEDED, message)
}

/// Create an out-of-bounds error
#[must_use]
pub const fn out_of_bounds_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Foundation, codes::OUT_OF_BOUNDS, message)
}

/// Create a length mismatch error
#[must_use]
pub const fn length_mismatch_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Foundation, codes::LENGTH_MISMATCH, message)
}

/// Create a process name buffer-too-small error
#[must_use]
pub const fn process_buffer_too_small_error(message: &'static str) -> Error {
    Error::new(
        ErrorCategory::Platform,
        codes::PROCESS_BUFFER_TOO_SMALL,
        message,
    )
}

/// Create a process name retrieval failure error
#[must_use]
pub const fn process_name_retrieval_failed_error(message: &'static str) -> Error {
    Error::new(
        ErrorCategory::Platform,
        codes::PROCESS_NAME_RETRIEVAL_FAILED,
        message,
    )
}

/// Create an empty name buffer error
#[must_use]
pub const fn process_buffer_empty_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Platform, codes::PROCESS_BUFFER_EMPTY, message)
}

/// Create an unsupported platform error
#[must_use]
pub const fn process_unsupported_platform_error(message: &'static str) -> Error {
    Error::new(
        ErrorCategory::NotSupported,
        codes::PROCESS_UNSUPPORTED_PLATFORM,
        message,
    )
}

/// Create a controller-already-started error
#[must_use]
pub const fn controller_already_started_error(message: &'static str) -> Error {
    Error::new(
        ErrorCategory::Runtime,
        codes::CONTROLLER_ALREADY_STARTED,
        message,
    )
}

/// Create a signal setup failure error
#[must_use]
pub const fn signal_setup_failed_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Runtime, codes::SIGNAL_SETUP_FAILED, message)
}
