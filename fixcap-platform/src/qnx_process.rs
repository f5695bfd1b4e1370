// FIXCAP - fixcap-platform
// Module: QNX Process Identity Provider
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! QNX Neutrino process-identity provider.
//!
//! Queries the process name through the native `proc_name` primitive. The
//! two symbols needed are declared in a local ffi module; no libc crate
//! dependency.

use fixcap_error::{helpers, Result};

use crate::process::ProcessInteraction;

/// FFI declarations for the QNX system calls needed for process identity
#[allow(non_camel_case_types)]
mod ffi {
    use core::ffi::{c_char, c_int};

    /// Maximum short-name length delivered by `proc_name`.
    pub const PROC_NAME_MAX: usize = 128;

    unsafe extern "C" {
        pub fn getpid() -> c_int;
        pub fn proc_name(pid: c_int, name: *mut c_char, size: usize) -> c_int;
    }
}

/// Provider backed by the QNX `proc_name` call.
#[derive(Debug, Default, Clone, Copy)]
pub struct QnxProcessInteraction;

impl ProcessInteraction for QnxProcessInteraction {
    fn process_name(&self, buffer: &mut [u8]) -> Result<usize> {
        if buffer.is_empty() {
            return Err(helpers::process_buffer_empty_error(
                "Process name buffer is zero-length",
            ));
        }

        let mut name = [0u8; ffi::PROC_NAME_MAX];
        // SAFETY: `name` outlives the call and its length is passed
        // alongside the pointer; `proc_name` NUL-terminates on success.
        let status = unsafe {
            ffi::proc_name(
                ffi::getpid(),
                name.as_mut_ptr().cast::<core::ffi::c_char>(),
                name.len(),
            )
        };
        if status == -1 {
            return Err(helpers::process_name_retrieval_failed_error(
                "proc_name query failed",
            ));
        }

        let len = name.iter().position(|&b| b == 0).unwrap_or(name.len());
        if len == 0 {
            return Err(helpers::process_name_retrieval_failed_error(
                "Empty process name from proc_name",
            ));
        }

        if len > buffer.len() {
            return Err(helpers::process_buffer_too_small_error(
                "Process name does not fit the supplied buffer",
            ));
        }

        buffer[..len].copy_from_slice(&name[..len]);
        Ok(len)
    }
}
