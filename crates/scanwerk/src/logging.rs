// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Log output for host applications.
//
// The crates only emit `tracing` events and never log payload contents, only
// lengths, kinds and risk levels. A host that has no subscriber of its own
// calls `init_logging` once at startup.

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging() -> bool {
    init_logging_with("info")
}

/// Like [`init_logging`], with a different fallback filter (e.g. `"scanwerk=debug"`).
pub fn init_logging_with(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let installed = tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok();
    if installed {
        tracing::info!("Scanwerk logging initialised");
    }
    installed
}
