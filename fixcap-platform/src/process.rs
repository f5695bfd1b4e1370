// FIXCAP - fixcap-platform
// Module: Process Identity Interface
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Process-identity retrieval interface.
//!
//! One operation: write the current process's short name into a
//! caller-supplied fixed-size buffer. Failures are discriminated through
//! `fixcap_error` codes so callers can distinguish an undersized buffer
//! from a failed OS query or an unsupported target.

use fixcap_error::Result;

/// Buffer size sufficient for the short process name on every supported
/// target. Callers that do not know better should allocate this much.
pub const PROCESS_NAME_BUFFER_SIZE: usize = 256;

/// Retrieval of the current process's identity.
///
/// Implementations are stateless; the factory hands out a `'static`
/// reference shared by all callers.
pub trait ProcessInteraction: Send + Sync {
    /// Writes the current process's short name into `buffer`.
    ///
    /// Returns the number of bytes written. The name is not NUL-terminated;
    /// the returned length delimits it.
    ///
    /// # Errors
    ///
    /// - `PROCESS_BUFFER_EMPTY` if `buffer` is zero-length.
    /// - `PROCESS_BUFFER_TOO_SMALL` if the name does not fit.
    /// - `PROCESS_NAME_RETRIEVAL_FAILED` if the OS query fails or yields an
    ///   empty name.
    fn process_name(&self, buffer: &mut [u8]) -> Result<usize>;
}

/// Returns the process-identity provider for this target, or `None` when
/// the target has no provider.
#[cfg(target_os = "linux")]
#[must_use]
pub fn process_interaction() -> Option<&'static dyn ProcessInteraction> {
    Some(&crate::linux_process::LinuxProcessInteraction)
}

/// Returns the process-identity provider for this target, or `None` when
/// the target has no provider.
#[cfg(target_os = "nto")]
#[must_use]
pub fn process_interaction() -> Option<&'static dyn ProcessInteraction> {
    Some(&crate::qnx_process::QnxProcessInteraction)
}

/// Returns the process-identity provider for this target, or `None` when
/// the target has no provider.
#[cfg(not(any(target_os = "linux", target_os = "nto")))]
#[must_use]
pub fn process_interaction() -> Option<&'static dyn ProcessInteraction> {
    None
}
