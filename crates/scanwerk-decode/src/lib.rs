// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanwerk-decode — Payload interpretation for the Scanwerk scanner.
//
// Classifies decoded barcode/QR strings (URL, Wi-Fi, email, phone, SMS, geo,
// vCard, text), normalizes URL-like payloads into fully-qualified URLs, and
// decodes the structured encodings the result screen can act on.

pub mod fields;
pub mod interpreter;
pub mod wifi;

pub use fields::extract_fields;
pub use interpreter::{normalize_url, parse, try_parse};
pub use wifi::{encode_wifi, parse_wifi};
