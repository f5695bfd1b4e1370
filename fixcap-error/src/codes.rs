// FIXCAP - fixcap-error
// Module: Error Codes
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Numbered error codes for the fixcap workspace.
//!
//! Codes are grouped in ranges by subsystem so a raw code in a log line can
//! be attributed without symbol information.

// ---------------------------------------------------------------------------
// Foundation errors (1000-1099)
// ---------------------------------------------------------------------------

/// More initializer values supplied than the container can hold
pub const CAPACITY_EXCEEDED: u16 = 1000;
/// Index outside the container bounds, reported through a fallible API
pub const OUT_OF_BOUNDS: u16 = 1001;
/// Source and destination extents do not match
pub const LENGTH_MISMATCH: u16 = 1002;

// ---------------------------------------------------------------------------
// Platform errors (2000-2099)
// ---------------------------------------------------------------------------

/// Caller-supplied name buffer cannot hold the process name
pub const PROCESS_BUFFER_TOO_SMALL: u16 = 2000;
/// The operating system query for the process name failed
pub const PROCESS_NAME_RETRIEVAL_FAILED: u16 = 2001;
/// Caller supplied a zero-length name buffer
pub const PROCESS_BUFFER_EMPTY: u16 = 2002;
/// No process-identity provider exists for this target
pub const PROCESS_UNSUPPORTED_PLATFORM: u16 = 2003;
/// Process-identity retrieval failed for an unclassified reason
pub const PROCESS_UNKNOWN_ERROR: u16 = 2004;

// ---------------------------------------------------------------------------
// Runtime errors (3000-3099)
// ---------------------------------------------------------------------------

/// The per-process controller was started a second time
pub const CONTROLLER_ALREADY_STARTED: u16 = 3000;
/// Registering the shutdown signal set with the OS failed
pub const SIGNAL_SETUP_FAILED: u16 = 3001;
