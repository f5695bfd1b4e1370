// FIXCAP - fixcapd
// Module: Demo Daemon Entry Point
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! # Fixcap Demo Daemon (fixcapd)
//!
//! A small daemon demonstrating the fixcap stack: it resolves its own
//! process identity through the platform layer, keeps its fixed signal
//! table in a `BoundedArray`, and runs a heartbeat loop until SIGTERM or
//! SIGINT is observed on a dedicated watcher thread.
//!
//! ## Usage
//!
//! ```bash
//! fixcapd [--cycle-ms <millis>] [--max-cycles <count>]
//! ```
//!
//! The daemon starts exactly one shutdown controller per process, logs one
//! heartbeat per cycle (default 5000 ms), and exits gracefully when a
//! shutdown signal arrives. `--max-cycles` bounds the loop for
//! non-interactive runs; without it the daemon runs until signalled.

use std::env;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use fixcap_error::helpers;
use fixcap_platform::{process_interaction, PROCESS_NAME_BUFFER_SIZE};
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

mod controller;

use controller::ShutdownController;

/// Fixcap demo daemon CLI arguments
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Heartbeat period of the run loop in milliseconds
    #[arg(long, default_value_t = 5_000)]
    cycle_ms: u64,

    /// Stop after this many heartbeat cycles instead of waiting for a signal
    #[arg(long, help = "Bound the run loop for non-interactive runs")]
    max_cycles: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize tracing
    initialize_tracing();

    // Parse command line arguments
    let args = Args::parse();

    info!(name = %log_process_identity(), "main thread started");

    let controller = ShutdownController::start().ok_or_else(|| {
        anyhow::Error::new(helpers::controller_already_started_error(
            "Shutdown controller already started in this process",
        ))
    })?;

    let exit_code = controller.run(Duration::from_millis(args.cycle_ms), args.max_cycles);
    info!(exit_code, "controller exited");
    info!("main thread finished");

    if exit_code == 0 {
        Ok(())
    } else {
        anyhow::bail!("controller exited with code {exit_code}")
    }
}

/// Initialize the tracing subscriber with the format selected through
/// `RUST_LOG_FORMAT` and the filter from `RUST_LOG` (default `info`).
fn initialize_tracing() {
    let format = env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NONE)
        .with_target(true)
        .with_thread_ids(true);

    match format.as_str() {
        "json" => subscriber.json().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.pretty().init(),
    }
}

/// Resolves the daemon's own short name through the platform layer, with
/// the same fallbacks the violation diagnostic uses.
fn log_process_identity() -> String {
    let mut buffer = [0u8; PROCESS_NAME_BUFFER_SIZE];
    match process_interaction() {
        Some(provider) => match provider.process_name(&mut buffer) {
            Ok(written) => String::from_utf8_lossy(&buffer[..written]).into_owned(),
            Err(_) => String::from("UnknownProcess"),
        },
        None => String::from("UnsupportedPlatform"),
    }
}
