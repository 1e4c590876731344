// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scan inspection — the path every decoded payload takes.
//
//   raw ─► classify ─┬─ url   ─► risk report + sanitized link
//                    ├─ wifi  ─► credentials (or none: no join action)
//                    ├─ email / phone / sms / geo ─► action fields
//                    └─ vcard / text ─► nothing further
//
// Inspection is pure: an inspector can be shared freely between threads.

use chrono::Utc;
use scanwerk_core::config::ScanwerkConfig;
use scanwerk_core::error::Result;
use scanwerk_core::types::{
    ParsedScan, PayloadFields, ScanId, ScanKind, ScanRecord, ScanSource, UrlRiskReport,
    WifiCredential,
};
use scanwerk_decode::{extract_fields, parse, parse_wifi, try_parse};
use scanwerk_security::{UrlRiskAnalyzer, UrlSanitizer, hash_payload};
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

/// Everything the result screen needs for one scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inspection {
    pub scan: ParsedScan,
    /// Present for Wi-Fi payloads with a usable SSID.
    pub wifi: Option<WifiCredential>,
    /// Present for URL payloads.
    pub risk: Option<UrlRiskReport>,
    /// Present for email, phone, SMS and geo payloads that yield a target.
    pub fields: Option<PayloadFields>,
    /// The URL with tracking parameters removed, when any were found.
    pub sanitized_url: Option<Url>,
}

impl Inspection {
    /// Build the history entry for this scan.
    pub fn record(&self, symbology: Option<&str>, source: ScanSource) -> ScanRecord {
        ScanRecord {
            id: ScanId::new(),
            raw: self.scan.raw().to_owned(),
            kind: self.scan.kind(),
            symbology: symbology.map(str::to_owned),
            source,
            payload_hash: hash_payload(self.scan.raw()),
            scanned_at: Utc::now(),
        }
    }
}

/// Runs classification, decoding, risk analysis and sanitizing with one
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct ScanInspector {
    analyzer: UrlRiskAnalyzer,
    sanitizer: UrlSanitizer,
}

impl ScanInspector {
    pub fn new(config: ScanwerkConfig) -> Self {
        Self {
            analyzer: UrlRiskAnalyzer::new(config.analyzer),
            sanitizer: UrlSanitizer::new(config.sanitizer),
        }
    }

    pub fn analyzer(&self) -> &UrlRiskAnalyzer {
        &self.analyzer
    }

    pub fn sanitizer(&self) -> &UrlSanitizer {
        &self.sanitizer
    }

    /// Inspect a decoded payload. Never fails.
    #[instrument(skip_all, fields(len = input.len()))]
    pub fn inspect(&self, input: &str) -> Inspection {
        self.inspect_scan(parse(input))
    }

    /// Inspect a decoded payload, rejecting blank input.
    pub fn try_inspect(&self, input: &str) -> Result<Inspection> {
        Ok(self.inspect_scan(try_parse(input)?))
    }

    fn inspect_scan(&self, scan: ParsedScan) -> Inspection {
        let mut inspection = Inspection {
            wifi: None,
            risk: None,
            fields: None,
            sanitized_url: None,
            scan,
        };

        match inspection.scan.kind() {
            ScanKind::Url => {
                if let Some(url) = inspection.scan.normalized_url() {
                    inspection.risk = Some(self.analyzer.assess(url, inspection.scan.raw()));
                    let cleaned = self.sanitizer.sanitize(url);
                    if cleaned != *url {
                        inspection.sanitized_url = Some(cleaned);
                    }
                }
            }
            ScanKind::Wifi => inspection.wifi = parse_wifi(inspection.scan.raw()),
            ScanKind::Email | ScanKind::Phone | ScanKind::Sms | ScanKind::Geo => {
                inspection.fields = extract_fields(&inspection.scan);
            }
            ScanKind::Vcard | ScanKind::Text => {}
        }

        debug!(
            kind = %inspection.scan.kind(),
            level = inspection.risk.as_ref().map(|r| r.level.as_str()),
            "scan inspected"
        );
        inspection
    }
}
