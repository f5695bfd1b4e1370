// FIXCAP - fixcap-foundation
// Module: Prelude
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Commonly used imports for crates building on `fixcap-foundation`.

pub use fixcap_error::{Error, Result};

pub use crate::array::{swap, BoundedArray};
pub use crate::violation::{
    install_reporter, ArrayAccessViolation, FatalReporter, ViolationReporter,
};
