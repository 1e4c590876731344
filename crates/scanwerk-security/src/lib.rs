// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanwerk-security — Link safety for scanned codes.
//
// Scores scanned URLs for phishing and malware indicators, strips tracking
// parameters before a link is copied or shared, and fingerprints payloads
// for the scan history.

pub mod integrity;
pub mod risk;
pub mod sanitize;

// PUBLIC API: Re-export the analyzer, sanitizer and fingerprinting entry points
pub use integrity::{hash_bytes, hash_payload};
pub use risk::{UrlRiskAnalyzer, analyze_url};
pub use sanitize::{UrlSanitizer, sanitize};
