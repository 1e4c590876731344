// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanwerk — Core types, configuration and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod host;
pub mod human_errors;
pub mod types;

pub use config::{AnalyzerConfig, SanitizerConfig, ScanwerkConfig};
pub use error::ScanwerkError;
pub use types::*;
