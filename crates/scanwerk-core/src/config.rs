// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Analyzer and sanitizer configuration.
//
// The thresholds and word lists are empirically chosen; they live here as
// named defaults so a host application can override any of them from a JSON
// settings file without touching the rules.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanwerkError};

/// Hosts known to redirect elsewhere.
pub const DEFAULT_SHORTENERS: &[&str] = &[
    "bit.ly",
    "t.co",
    "tinyurl.com",
    "goo.gl",
    "is.gd",
    "buff.ly",
    "ow.ly",
    "rebrand.ly",
];

/// Top-level domains over-represented in abuse feeds.
pub const DEFAULT_SUSPICIOUS_TLDS: &[&str] = &["zip", "mov", "gq", "tk", "ml", "cf"];

/// Executable and installer extensions.
pub const DEFAULT_SUSPICIOUS_EXTENSIONS: &[&str] = &[
    "exe", "apk", "scr", "bat", "cmd", "jar", "dmg", "pkg", "appx", "iso",
];

/// Words common in credential-harvesting hosts and paths.
pub const DEFAULT_PHISHING_KEYWORDS: &[&str] =
    &["login", "verify", "account", "update", "secure", "bank"];

/// Query parameters that are always tracking noise.
pub const DEFAULT_TRACKING_PARAMS: &[&str] = &[
    "fbclid", "gclid", "dclid", "igshid", "msclkid", "mc_cid", "mc_eid",
];

/// Query parameter prefixes that mark tracking noise (`utm_source`, ...).
pub const DEFAULT_TRACKING_PREFIXES: &[&str] = &["utm_"];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

/// Settings for the URL risk analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Run the extended heuristics (user preference, on by default).
    pub aggressive: bool,
    /// Raw payloads at least this many characters long are "very long".
    pub long_url_chars: usize,
    /// Raw payloads longer than this are "extremely long".
    pub extreme_url_chars: usize,
    /// Paths longer than this are flagged.
    pub long_path_chars: usize,
    /// Queries longer than this are flagged.
    pub long_query_chars: usize,
    /// More `%` characters than this counts as heavy percent-encoding.
    pub max_percent_signs: usize,
    /// Labels beyond the base domain at which a host has "many subdomains".
    pub subdomain_threshold: usize,
    /// Number of flags at which a report becomes medium risk.
    pub medium_flag_count: usize,
    /// The one explicit port that is not flagged.
    pub expected_port: u16,
    pub shorteners: Vec<String>,
    pub suspicious_tlds: Vec<String>,
    pub suspicious_extensions: Vec<String>,
    pub phishing_keywords: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            aggressive: true,
            long_url_chars: 140,
            extreme_url_chars: 2048,
            long_path_chars: 80,
            long_query_chars: 120,
            max_percent_signs: 10,
            subdomain_threshold: 3,
            medium_flag_count: 2,
            expected_port: 443,
            shorteners: owned(DEFAULT_SHORTENERS),
            suspicious_tlds: owned(DEFAULT_SUSPICIOUS_TLDS),
            suspicious_extensions: owned(DEFAULT_SUSPICIOUS_EXTENSIONS),
            phishing_keywords: owned(DEFAULT_PHISHING_KEYWORDS),
        }
    }
}

/// Settings for the tracking-parameter sanitizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Exact parameter names to strip.
    pub tracking_params: Vec<String>,
    /// Parameter name prefixes to strip.
    pub tracking_prefixes: Vec<String>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            tracking_params: owned(DEFAULT_TRACKING_PARAMS),
            tracking_prefixes: owned(DEFAULT_TRACKING_PREFIXES),
        }
    }
}

impl SanitizerConfig {
    /// Whether a parameter name (any case) is tracking noise.
    pub fn is_tracking_param(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.tracking_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
            || self.tracking_params.iter().any(|p| *p == name)
    }
}

/// Complete Scanwerk settings as persisted by the host application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanwerkConfig {
    pub analyzer: AnalyzerConfig,
    pub sanitizer: SanitizerConfig,
}

impl ScanwerkConfig {
    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the rules cannot apply meaningfully.
    ///
    /// Word lists are matched against lowercased input, so entries must be
    /// non-empty and lowercase.
    pub fn validate(&self) -> Result<()> {
        let a = &self.analyzer;
        if a.medium_flag_count == 0 {
            return Err(ScanwerkError::InvalidConfig(
                "medium_flag_count must be at least 1".into(),
            ));
        }
        if a.long_url_chars == 0 || a.extreme_url_chars == 0 {
            return Err(ScanwerkError::InvalidConfig(
                "URL length thresholds must be positive".into(),
            ));
        }

        let lists = [
            ("shorteners", &a.shorteners),
            ("suspicious_tlds", &a.suspicious_tlds),
            ("suspicious_extensions", &a.suspicious_extensions),
            ("phishing_keywords", &a.phishing_keywords),
            ("tracking_params", &self.sanitizer.tracking_params),
            ("tracking_prefixes", &self.sanitizer.tracking_prefixes),
        ];
        for (name, list) in lists {
            if let Some(bad) = list
                .iter()
                .find(|entry| entry.is_empty() || **entry != entry.to_lowercase())
            {
                return Err(ScanwerkError::InvalidConfig(format!(
                    "{name} entry {bad:?} must be non-empty lowercase"
                )));
            }
        }
        Ok(())
    }
}
