// FIXCAP - fixcap-platform
// Module: Linux Process Identity Provider
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Linux process-identity provider.
//!
//! Reads the short process name from the `/proc/self/comm` pseudo-file.
//! The kernel caps `comm` at 16 bytes (`TASK_COMM_LEN`), well under
//! [`PROCESS_NAME_BUFFER_SIZE`](crate::PROCESS_NAME_BUFFER_SIZE).

use std::fs;

use fixcap_error::{helpers, Result};

use crate::process::ProcessInteraction;

/// Provider backed by `/proc/self/comm`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinuxProcessInteraction;

impl ProcessInteraction for LinuxProcessInteraction {
    fn process_name(&self, buffer: &mut [u8]) -> Result<usize> {
        if buffer.is_empty() {
            return Err(helpers::process_buffer_empty_error(
                "Process name buffer is zero-length",
            ));
        }

        let comm = fs::read_to_string("/proc/self/comm").map_err(|_| {
            helpers::process_name_retrieval_failed_error("Could not read /proc/self/comm")
        })?;

        // comm carries a trailing newline
        let name = comm.trim_end_matches('\n');
        if name.is_empty() {
            return Err(helpers::process_name_retrieval_failed_error(
                "Empty process name in /proc/self/comm",
            ));
        }

        let bytes = name.as_bytes();
        if bytes.len() > buffer.len() {
            return Err(helpers::process_buffer_too_small_error(
                "Process name does not fit the supplied buffer",
            ));
        }

        buffer[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fixcap_error::codes;

    #[test]
    fn empty_buffer_is_rejected_before_the_os_query() {
        let provider = LinuxProcessInteraction;
        let mut buffer = [0u8; 0];
        let error = provider.process_name(&mut buffer).unwrap_err();
        assert_eq!(error.code, codes::PROCESS_BUFFER_EMPTY);
    }

    #[test]
    fn one_byte_buffer_is_too_small() {
        // Test binaries have multi-character names, so a single byte can
        // never hold the comm value.
        let provider = LinuxProcessInteraction;
        let mut buffer = [0u8; 1];
        let error = provider.process_name(&mut buffer).unwrap_err();
        assert_eq!(error.code, codes::PROCESS_BUFFER_TOO_SMALL);
    }

    #[test]
    fn name_round_trips_through_the_buffer() {
        let provider = LinuxProcessInteraction;
        let mut buffer = [0u8; 64];
        let written = provider.process_name(&mut buffer).unwrap();
        let name = core::str::from_utf8(&buffer[..written]).unwrap();
        assert!(!name.is_empty());
        assert!(!name.ends_with('\n'));
    }
}
