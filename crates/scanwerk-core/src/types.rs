// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Scanwerk payload interpreter.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::ScanwerkError;

/// Unique identifier for a scan history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanId(pub Uuid);

impl ScanId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScanId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Semantic kind of a decoded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    Url,
    Wifi,
    Email,
    Phone,
    Sms,
    Geo,
    Vcard,
    Text,
}

impl ScanKind {
    /// Every kind, in classification order (text last as the fallback).
    pub const ALL: [ScanKind; 8] = [
        Self::Wifi,
        Self::Vcard,
        Self::Email,
        Self::Phone,
        Self::Sms,
        Self::Geo,
        Self::Url,
        Self::Text,
    ];

    /// Stable lowercase tag used by the history store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Wifi => "wifi",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Sms => "sms",
            Self::Geo => "geo",
            Self::Vcard => "vcard",
            Self::Text => "text",
        }
    }

    /// Human-readable label for UI display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Url => "Web link",
            Self::Wifi => "Wi-Fi network",
            Self::Email => "Email address",
            Self::Phone => "Phone number",
            Self::Sms => "Text message",
            Self::Geo => "Location",
            Self::Vcard => "Contact card",
            Self::Text => "Text",
        }
    }
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanKind {
    type Err = ScanwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScanwerkError::UnknownKind(s.to_owned()))
    }
}

/// A classified scan payload.
///
/// `normalized_url` is present exactly when `kind` is [`ScanKind::Url`]; the
/// constructors are the only way to build one, so the pairing always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedScan {
    raw: String,
    kind: ScanKind,
    normalized_url: Option<Url>,
}

impl ParsedScan {
    /// A payload that normalized to a fully-qualified URL.
    pub fn url(raw: impl Into<String>, url: Url) -> Self {
        Self {
            raw: raw.into(),
            kind: ScanKind::Url,
            normalized_url: Some(url),
        }
    }

    /// A payload of any non-URL kind. A `Url` kind without a URL is recorded
    /// as `Text`.
    pub fn classified(raw: impl Into<String>, kind: ScanKind) -> Self {
        let kind = if kind == ScanKind::Url {
            ScanKind::Text
        } else {
            kind
        };
        Self {
            raw: raw.into(),
            kind,
            normalized_url: None,
        }
    }

    /// The trimmed payload.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> ScanKind {
        self.kind
    }

    pub fn normalized_url(&self) -> Option<&Url> {
        self.normalized_url.as_ref()
    }
}

/// Credentials decoded from a `WIFI:` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiCredential {
    pub ssid: String,
    /// `None` when the network is open.
    pub passphrase: Option<String>,
    pub is_wep: bool,
    pub is_open: bool,
    pub hidden: bool,
}

/// Severity of a scanned URL, ordered for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single heuristic finding about a URL.
///
/// `Display` renders the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "rule", content = "detail", rename_all = "snake_case")]
pub enum RiskFlag {
    NotHttps,
    UserInfo,
    PunycodeDomain,
    IpAddressHost,
    LinkShortener,
    VeryLongUrl,
    NonStandardPort(u16),
    SuspiciousTld(String),
    ManySubdomains,
    LongPath,
    LongQuery,
    AtInPathOrQuery,
    SuspiciousFileType(String),
    PathTraversal,
    HeavilyPercentEncoded,
    NonAscii,
    PhishingKeywords,
    ExtremelyLongUrl,
}

impl RiskFlag {
    /// Flags that escalate a report straight to [`RiskLevel::High`].
    pub fn is_high_risk(&self) -> bool {
        matches!(
            self,
            Self::PunycodeDomain
                | Self::IpAddressHost
                | Self::PathTraversal
                | Self::SuspiciousFileType(_)
        )
    }
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotHttps => f.write_str("Not HTTPS"),
            Self::UserInfo => f.write_str("Contains user info (@ in URL)"),
            Self::PunycodeDomain => f.write_str("Punycode domain (possible look-alike)"),
            Self::IpAddressHost => f.write_str("IP address host"),
            Self::LinkShortener => f.write_str("Link shortener"),
            Self::VeryLongUrl => f.write_str("Very long URL"),
            Self::NonStandardPort(port) => write!(f, "Non-standard port :{port}"),
            Self::SuspiciousTld(tld) => write!(f, "Suspicious TLD ({tld})"),
            Self::ManySubdomains => f.write_str("Many subdomains"),
            Self::LongPath => f.write_str("Long path"),
            Self::LongQuery => f.write_str("Long query"),
            Self::AtInPathOrQuery => f.write_str("@ in path or query"),
            Self::SuspiciousFileType(ext) => write!(f, "Suspicious file type (.{ext})"),
            Self::PathTraversal => f.write_str("Path traversal sequences"),
            Self::HeavilyPercentEncoded => f.write_str("Heavily percent-encoded"),
            Self::NonAscii => f.write_str("Non-ASCII characters"),
            Self::PhishingKeywords => f.write_str("Phishing keywords"),
            Self::ExtremelyLongUrl => f.write_str("Extremely long URL"),
        }
    }
}

/// Findings for a URL, in rule-evaluation order, plus the derived level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRiskReport {
    pub flags: Vec<RiskFlag>,
    pub level: RiskLevel,
}

impl UrlRiskReport {
    /// Flag texts as shown to the user.
    pub fn messages(&self) -> Vec<String> {
        self.flags.iter().map(ToString::to_string).collect()
    }

    pub fn has_flag(&self, flag: &RiskFlag) -> bool {
        self.flags.contains(flag)
    }

    pub fn is_clean(&self) -> bool {
        self.flags.is_empty()
    }
}

// -- Structured payload fields ----------------------------------------------

/// Target of a `mailto:` link or bare email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTarget {
    pub address: String,
    pub subject: Option<String>,
    pub body: Option<String>,
}

/// A dialable number (digits with an optional leading `+`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneTarget {
    pub number: String,
}

/// Recipient and optional prefilled body of an `sms:`/`smsto:` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsTarget {
    pub number: String,
    pub body: Option<String>,
}

/// Coordinates from a `geo:` URI (RFC 5870).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
}

/// Action-ready fields extracted from a classified payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PayloadFields {
    Email(EmailTarget),
    Phone(PhoneTarget),
    Sms(SmsTarget),
    Geo(GeoPoint),
}

// -- History -----------------------------------------------------------------

/// Where a payload came from. Opaque to classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanSource {
    /// Decoded from the live camera preview.
    LiveCamera,
    /// Decoded from a still image picked from the photo library.
    StillImage,
    /// Pasted by the user.
    Pasted,
}

/// Shape of one entry in the append-only scan history.
///
/// Storage itself belongs to the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: ScanId,
    pub raw: String,
    pub kind: ScanKind,
    /// Barcode symbology reported by the decoder (e.g. "qr", "ean13").
    pub symbology: Option<String>,
    pub source: ScanSource,
    /// SHA-256 hex digest of `raw`, used to collapse repeat scans.
    pub payload_hash: String,
    pub scanned_at: DateTime<Utc>,
}
