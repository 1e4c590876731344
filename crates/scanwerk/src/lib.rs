// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanwerk — scan inspection for the QR/barcode scanner.
//
// Ties the interpreter, Wi-Fi decoder, risk analyzer and sanitizer into the
// single call the result screen makes per decoded payload, and owns the
// settings file and log setup for the host application.

pub mod inspect;
pub mod logging;
pub mod settings;

pub use inspect::{Inspection, ScanInspector};
pub use logging::init_logging;
pub use settings::{load_config, load_config_or_default, save_config};

pub use scanwerk_core::{
    AnalyzerConfig, ParsedScan, PayloadFields, RiskFlag, RiskLevel, SanitizerConfig, ScanKind,
    ScanRecord, ScanSource, ScanwerkConfig, ScanwerkError, UrlRiskReport, WifiCredential,
};
