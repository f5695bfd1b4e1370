// FIXCAP - fixcap-error
// Module: Error Types
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error type for the fixcap workspace.
//!
//! `Error` is a small `Copy` value holding a category, a numbered code and a
//! static message. Static messages keep the type allocation-free so it can
//! travel through `no_std` code unchanged.

use core::fmt;

use crate::codes;

/// `Error` categories for fixcap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Bounded-container errors (capacity, bounds)
    Foundation = 1,
    /// Platform abstraction errors (process identity)
    Platform = 2,
    /// Application runtime errors (lifecycle, signals)
    Runtime = 3,
    /// Operation not supported on this target
    NotSupported = 4,
    /// Invalid argument supplied by the caller
    Parameter = 5,
    /// Unclassified errors
    Unknown = 6,
}

/// fixcap `Error` type.
///
/// Categorized error with a numbered code and a static message. See
/// [`crate::codes`] for the code ranges.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code: u16,
    /// `Error` message
    pub message: &'static str,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Bounded-container capacity exceeded error
    pub const CAPACITY_EXCEEDED: Self = Self::new(
        ErrorCategory::Foundation,
        codes::CAPACITY_EXCEEDED,
        "Bounded container capacity exceeded",
    );

    /// No process-identity provider for this target
    pub const PROCESS_UNSUPPORTED_PLATFORM: Self = Self::new(
        ErrorCategory::NotSupported,
        codes::PROCESS_UNSUPPORTED_PLATFORM,
        "Process identity is not available on this platform",
    );

    /// Check if this is a foundation error
    #[must_use]
    pub fn is_foundation_error(&self) -> bool {
        self.category == ErrorCategory::Foundation
    }

    /// Check if this is a platform error
    #[must_use]
    pub fn is_platform_error(&self) -> bool {
        self.category == ErrorCategory::Platform
    }

    /// Check if this is a runtime error
    #[must_use]
    pub fn is_runtime_error(&self) -> bool {
        self.category == ErrorCategory::Runtime
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}:{}] {}", self.category, self.code, self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = Error::new(
            ErrorCategory::Platform,
            codes::PROCESS_BUFFER_TOO_SMALL,
            "buffer too small",
        );
        assert_eq!(error.category, ErrorCategory::Platform);
        assert_eq!(error.code, codes::PROCESS_BUFFER_TOO_SMALL);
        assert!(error.is_platform_error());
        assert!(!error.is_foundation_error());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_error_display() {
        let error = Error::CAPACITY_EXCEEDED;
        let rendered = std::format!("{error}");
        assert!(rendered.contains("1000"));
        assert!(rendered.contains("capacity exceeded"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(Error::CAPACITY_EXCEEDED, Error::CAPACITY_EXCEEDED);
        assert_ne!(Error::CAPACITY_EXCEEDED, Error::PROCESS_UNSUPPORTED_PLATFORM);
    }
}
