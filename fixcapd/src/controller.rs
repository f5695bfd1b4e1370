// FIXCAP - fixcapd
// Module: Shutdown Controller
//
// Copyright (c) 2025 The Fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Signal-driven graceful shutdown controller.
//!
//! Exactly one controller exists per process. `start()` claims the
//! process-wide slot and spawns a dedicated watcher thread blocked on the
//! shutdown signal set (SIGTERM, SIGINT). The `run` loop emits one
//! heartbeat per cycle and parks on a condition variable for the rest of
//! the cycle, so a signal ends the loop without waiting the period out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use fixcap_error::helpers;
use fixcap_foundation::BoundedArray;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::{Handle, Signals};
use tracing::{error, info, warn};

/// Process-wide claim for the single controller instance.
static INSTANCE_CREATED: AtomicBool = AtomicBool::new(false);

/// Shared flag-and-notifier pair between the run loop, the signal watcher
/// and any shutdown handles.
#[derive(Debug, Default)]
struct ShutdownState {
    requested: Mutex<bool>,
    notifier: Condvar,
}

impl ShutdownState {
    fn request(&self) {
        let mut requested = self
            .requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *requested = true;
        self.notifier.notify_all();
    }
}

/// Cloneable handle for requesting shutdown programmatically.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    state: Arc<ShutdownState>,
}

impl ShutdownHandle {
    /// Requests shutdown; the run loop observes it within the current
    /// cycle.
    pub fn request(&self) {
        self.state.request();
    }
}

/// The per-process shutdown controller.
pub struct ShutdownController {
    watcher: Option<JoinHandle<()>>,
    signals_handle: Handle,
    state: Arc<ShutdownState>,
}

impl ShutdownController {
    /// Starts the controller, claiming the process-wide instance slot.
    ///
    /// Returns `None` when a controller was already started in this
    /// process. Failure to register the signal set or to spawn the
    /// watcher thread is unrecoverable and aborts the process.
    pub fn start() -> Option<Self> {
        if INSTANCE_CREATED
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("controller instance already created and exclusively owned");
            return None;
        }

        let shutdown_signals = BoundedArray::<i32, 2>::from([SIGTERM, SIGINT]);
        let mut signals = match Signals::new(shutdown_signals.iter()) {
            Ok(signals) => signals,
            Err(source) => {
                let error = helpers::signal_setup_failed_error(
                    "Registering the shutdown signal set failed",
                );
                error!(%source, code = error.code, "signal setup failed");
                std::process::abort();
            }
        };
        let signals_handle = signals.handle();

        let state = Arc::new(ShutdownState::default());
        let watcher_state = Arc::clone(&state);
        let spawned = thread::Builder::new()
            .name("fixcapd-sig".to_string())
            .spawn(move || {
                // Ends either on the first shutdown signal or when the
                // handle is closed during controller teardown.
                for signal in signals.forever() {
                    info!(signal, "shutdown signal received");
                    watcher_state.request();
                    break;
                }
            });
        let watcher = match spawned {
            Ok(watcher) => watcher,
            Err(source) => {
                error!(%source, "graceful shutdown watcher thread creation failed");
                std::process::abort();
            }
        };

        info!("controller initialized");
        Some(Self {
            watcher: Some(watcher),
            signals_handle,
            state,
        })
    }

    /// Returns a handle for requesting shutdown from other threads.
    #[must_use]
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            state: Arc::clone(&self.state),
        }
    }

    /// Runs the heartbeat loop until shutdown is requested or `max_cycles`
    /// completes. Returns the process exit code.
    pub fn run(self, cycle: Duration, max_cycles: Option<u64>) -> u8 {
        let exit_code: u8 = 0;
        let mut completed: u64 = 0;

        info!("controller is in running state");

        let mut requested = self
            .state
            .requested
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        loop {
            if *requested {
                info!("shutdown observed by run loop");
                break;
            }
            if let Some(limit) = max_cycles {
                if completed >= limit {
                    info!(completed, "cycle limit reached");
                    break;
                }
            }

            info!(cycle = completed, "controller heartbeat");

            let (guard, wait_outcome) = self
                .state
                .notifier
                .wait_timeout_while(requested, cycle, |requested| !*requested)
                .unwrap_or_else(PoisonError::into_inner);
            requested = guard;
            completed += 1;

            if !wait_outcome.timed_out() {
                info!("shutdown observed by run loop");
                break;
            }
        }
        drop(requested);

        // Teardown happens in Drop when `self` leaves this scope.
        exit_code
    }
}

impl Drop for ShutdownController {
    fn drop(&mut self) {
        // Unblock the watcher if no signal ever arrived, then join it.
        self.signals_handle.close();
        if let Some(watcher) = self.watcher.take() {
            if watcher.join().is_err() {
                error!("signal watcher thread panicked");
            }
        }
        info!("controller demolished");
    }
}
