// FIXCAP - fixcap-error
// Module: Prelude
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Commonly used imports for crates building on `fixcap-error`.

pub use crate::{codes, helpers, Error, ErrorCategory, Result};
