// FIXCAP - fixcap-foundation
// Module: Violation Protocol - Checked-access failure path
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Violation protocol for checked-access failures.
//!
//! A failed bounds check in [`BoundedArray::at`](crate::BoundedArray::at)
//! is not an error value and not a panic in the recoverable sense: it is a
//! violation. The protocol is two states with one terminal transition:
//! the instant a check fails, the process identity is acquired, one
//! diagnostic line naming the call site, the offending index and the
//! container size is emitted, and the process terminates abnormally. No
//! unwinding, no retry, no cancellation.
//!
//! The reporter behind steps two through four is process-global, lazily
//! established on first use and installable exactly once beforehand. The
//! default [`FatalReporter`] writes to stderr and calls
//! `std::process::abort()`. Tests install a recording double whose
//! termination diverges without killing the process, which keeps the
//! protocol observable.

use core::panic::Location;
use std::sync::OnceLock;

use fixcap_platform::{process_interaction, PROCESS_NAME_BUFFER_SIZE};

/// Identity used when a provider exists but the name query fails.
const UNKNOWN_PROCESS: &str = "UnknownProcess";
/// Identity used when the target has no process-identity provider.
const UNSUPPORTED_PLATFORM: &str = "UnsupportedPlatform";

/// Data captured at the moment a checked access fails.
///
/// Borrows are valid for the duration of the report call only.
#[derive(Debug, Clone, Copy)]
pub struct ArrayAccessViolation<'a> {
    /// Short name of the running process, or a fixed fallback
    pub process: &'a str,
    /// Source file of the failing access site, path-stripped
    pub file: &'a str,
    /// Source line of the failing access site
    pub line: u32,
    /// The out-of-range index that was requested
    pub index: usize,
    /// The size of the accessed array
    pub size: usize,
}

/// Receiver for the violation transition.
///
/// `report` emits the diagnostic; `terminate` ends execution and must
/// diverge. The two are split so a test double can observe the diagnostic
/// and substitute a panic for process death.
pub trait ViolationReporter: Send + Sync {
    /// Emit one diagnostic for the violation.
    fn report(&self, violation: &ArrayAccessViolation<'_>);

    /// End execution. Must not return.
    fn terminate(&self) -> !;
}

/// Default reporter: one stderr line, then abnormal process termination.
///
/// Termination uses `std::process::abort()` - no stack unwinding, no
/// destructors, nothing catchable.
#[derive(Debug, Default)]
pub struct FatalReporter;

impl ViolationReporter for FatalReporter {
    fn report(&self, violation: &ArrayAccessViolation<'_>) {
        #[cfg(feature = "log")]
        log::error!(
            "Violation detected in {} at {}:{}: BoundedArray access out of range: tried to access index {} in array of size {}",
            violation.process,
            violation.file,
            violation.line,
            violation.index,
            violation.size
        );
        eprintln!(
            "[fixcap][FATAL]: Violation detected in {} at {}:{}: BoundedArray access out of range: Tried to access index {} in array of size {}.",
            violation.process, violation.file, violation.line, violation.index, violation.size
        );
    }

    fn terminate(&self) -> ! {
        eprintln!("FATAL: Process aborted due to a critical violation in BoundedArray.");
        std::process::abort()
    }
}

static REPORTER: OnceLock<&'static dyn ViolationReporter> = OnceLock::new();
static FATAL: FatalReporter = FatalReporter;

/// Installs the process-wide violation reporter.
///
/// At most one installation takes effect for the process lifetime; the
/// first caller wins and later calls return `false`. A reporter
/// established lazily by a violation also counts as the first
/// installation. Safe under concurrent first use.
pub fn install_reporter(reporter: &'static dyn ViolationReporter) -> bool {
    REPORTER.set(reporter).is_ok()
}

fn active_reporter() -> &'static dyn ViolationReporter {
    *REPORTER.get_or_init(|| &FATAL)
}

/// Executes the violation transition for an out-of-range checked access.
///
/// Acquires the process identity, builds the diagnostic, hands it to the
/// installed reporter and terminates through it. Never returns.
#[cold]
#[inline(never)]
pub(crate) fn out_of_range(location: &Location<'_>, index: usize, size: usize) -> ! {
    let mut name = [0u8; PROCESS_NAME_BUFFER_SIZE];
    let process = process_identifier(&mut name);
    let violation = ArrayAccessViolation {
        process,
        file: strip_path(location.file()),
        line: location.line(),
        index,
        size,
    };
    let reporter = active_reporter();
    reporter.report(&violation);
    reporter.terminate()
}

/// Resolves the current process's short name, substituting the fixed
/// fallbacks on any non-success result.
fn process_identifier(buffer: &mut [u8]) -> &str {
    match process_interaction() {
        Some(provider) => match provider.process_name(&mut *buffer) {
            Ok(written) => core::str::from_utf8(&buffer[..written]).unwrap_or(UNKNOWN_PROCESS),
            Err(_) => UNKNOWN_PROCESS,
        },
        None => UNSUPPORTED_PLATFORM,
    }
}

/// Strips directory components from a compiler-provided path, handling
/// both separators.
fn strip_path(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(position) => &path[position + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_path_unix() {
        assert_eq!(strip_path("src/array.rs"), "array.rs");
        assert_eq!(strip_path("/a/b/c/array.rs"), "array.rs");
    }

    #[test]
    fn test_strip_path_windows() {
        assert_eq!(strip_path("C:\\project\\src\\array.rs"), "array.rs");
    }

    #[test]
    fn test_strip_path_bare_filename() {
        assert_eq!(strip_path("array.rs"), "array.rs");
    }

    #[test]
    fn test_process_identifier_never_empty() {
        let mut buffer = [0u8; PROCESS_NAME_BUFFER_SIZE];
        let identity = process_identifier(&mut buffer);
        assert!(!identity.is_empty());
    }
}
