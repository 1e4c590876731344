// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// URL risk analysis — heuristic phishing/malware indicators for scanned links.
//
// Rules are a fixed, ordered table. Each rule contributes at most one flag,
// and flags are appended in table order, so identical input always yields
// the same flags in the same order. The first six rules always run; the rest
// run only in aggressive mode.
//
// Level: High if any of punycode host, IP host, suspicious file type or path
// traversal fired; Medium if at least `medium_flag_count` flags; else Low.

use scanwerk_core::config::AnalyzerConfig;
use scanwerk_core::host::is_dotted_quad;
use scanwerk_core::types::{RiskFlag, RiskLevel, UrlRiskReport};
use tracing::{debug, info};
use url::Url;

/// Substrings in the raw payload that indicate directory traversal.
const TRAVERSAL_MARKERS: &[&str] = &["../", "..%2f", "%2e%2e"];

/// Everything a rule may look at, computed once per analysis.
struct RuleInput<'a> {
    url: &'a Url,
    raw: &'a str,
    /// Lowercased host, empty for host-less URLs.
    host: String,
    config: &'a AnalyzerConfig,
}

/// One heuristic: a predicate that yields a flag when it fires.
struct Rule {
    /// Only evaluated in aggressive mode.
    extended: bool,
    check: fn(&RuleInput<'_>) -> Option<RiskFlag>,
}

const fn baseline(check: fn(&RuleInput<'_>) -> Option<RiskFlag>) -> Rule {
    Rule {
        extended: false,
        check,
    }
}

const fn extended(check: fn(&RuleInput<'_>) -> Option<RiskFlag>) -> Rule {
    Rule {
        extended: true,
        check,
    }
}

/// Evaluation order is display order.
const RULES: &[Rule] = &[
    baseline(not_https),
    baseline(user_info),
    baseline(punycode_host),
    baseline(ip_address_host),
    baseline(link_shortener),
    baseline(very_long_url),
    extended(non_standard_port),
    extended(suspicious_tld),
    extended(many_subdomains),
    extended(long_path),
    extended(long_query),
    extended(at_in_path_or_query),
    extended(suspicious_file_type),
    extended(path_traversal),
    extended(heavily_percent_encoded),
    extended(non_ascii),
    extended(phishing_keywords),
    extended(extremely_long_url),
];

/// Scores scanned URLs against the configured heuristics.
#[derive(Debug, Clone, Default)]
pub struct UrlRiskAnalyzer {
    config: AnalyzerConfig,
}

impl UrlRiskAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze `url` (the normalized form of `raw`).
    ///
    /// `raw` is the payload as scanned; length, encoding and traversal rules
    /// look at it rather than at the normalized URL. With `aggressive` off
    /// only the baseline rules run.
    pub fn analyze(&self, url: &Url, raw: &str, aggressive: bool) -> UrlRiskReport {
        let input = RuleInput {
            url,
            raw,
            host: url.host_str().unwrap_or_default().to_lowercase(),
            config: &self.config,
        };

        let flags: Vec<RiskFlag> = RULES
            .iter()
            .filter(|rule| aggressive || !rule.extended)
            .filter_map(|rule| (rule.check)(&input))
            .collect();
        let level = self.level_for(&flags);

        debug!(flags = flags.len(), %level, aggressive, "analyzed scanned URL");
        if level == RiskLevel::High {
            info!(flags = flags.len(), "high-risk URL scanned");
        }

        UrlRiskReport { flags, level }
    }

    /// Analyze using the configured `aggressive` preference.
    pub fn assess(&self, url: &Url, raw: &str) -> UrlRiskReport {
        self.analyze(url, raw, self.config.aggressive)
    }

    fn level_for(&self, flags: &[RiskFlag]) -> RiskLevel {
        if flags.iter().any(RiskFlag::is_high_risk) {
            RiskLevel::High
        } else if flags.len() >= self.config.medium_flag_count {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Analyze with the default thresholds and every rule enabled.
pub fn analyze_url(url: &Url, raw: &str) -> UrlRiskReport {
    UrlRiskAnalyzer::default().analyze(url, raw, true)
}

// -- Baseline rules ----------------------------------------------------------

fn not_https(input: &RuleInput<'_>) -> Option<RiskFlag> {
    (!input.url.scheme().eq_ignore_ascii_case("https")).then_some(RiskFlag::NotHttps)
}

fn user_info(input: &RuleInput<'_>) -> Option<RiskFlag> {
    (!input.url.username().is_empty() || input.url.password().is_some())
        .then_some(RiskFlag::UserInfo)
}

fn punycode_host(input: &RuleInput<'_>) -> Option<RiskFlag> {
    input.host.contains("xn--").then_some(RiskFlag::PunycodeDomain)
}

fn ip_address_host(input: &RuleInput<'_>) -> Option<RiskFlag> {
    is_dotted_quad(&input.host).then_some(RiskFlag::IpAddressHost)
}

fn link_shortener(input: &RuleInput<'_>) -> Option<RiskFlag> {
    input
        .config
        .shorteners
        .iter()
        .any(|s| *s == input.host)
        .then_some(RiskFlag::LinkShortener)
}

fn very_long_url(input: &RuleInput<'_>) -> Option<RiskFlag> {
    (input.raw.chars().count() >= input.config.long_url_chars).then_some(RiskFlag::VeryLongUrl)
}

// -- Extended rules ----------------------------------------------------------

fn non_standard_port(input: &RuleInput<'_>) -> Option<RiskFlag> {
    explicit_port(input.url, input.raw)
        .filter(|port| *port != input.config.expected_port)
        .map(RiskFlag::NonStandardPort)
}

fn suspicious_tld(input: &RuleInput<'_>) -> Option<RiskFlag> {
    let tld = input.host.rsplit('.').next().unwrap_or_default();
    input
        .config
        .suspicious_tlds
        .iter()
        .any(|t| t == tld)
        .then(|| RiskFlag::SuspiciousTld(tld.to_owned()))
}

fn many_subdomains(input: &RuleInput<'_>) -> Option<RiskFlag> {
    let labels = input.host.split('.').count();
    (labels.saturating_sub(2) >= input.config.subdomain_threshold)
        .then_some(RiskFlag::ManySubdomains)
}

fn long_path(input: &RuleInput<'_>) -> Option<RiskFlag> {
    (input.url.path().len() > input.config.long_path_chars).then_some(RiskFlag::LongPath)
}

fn long_query(input: &RuleInput<'_>) -> Option<RiskFlag> {
    let len = input.url.query().map_or(0, str::len);
    (len > input.config.long_query_chars).then_some(RiskFlag::LongQuery)
}

fn at_in_path_or_query(input: &RuleInput<'_>) -> Option<RiskFlag> {
    (input.raw.contains('@') && !input.host.contains('@')).then_some(RiskFlag::AtInPathOrQuery)
}

fn suspicious_file_type(input: &RuleInput<'_>) -> Option<RiskFlag> {
    let ext = path_extension(input.url.path())?.to_lowercase();
    input
        .config
        .suspicious_extensions
        .iter()
        .any(|e| *e == ext)
        .then_some(RiskFlag::SuspiciousFileType(ext))
}

fn path_traversal(input: &RuleInput<'_>) -> Option<RiskFlag> {
    let lower = input.raw.to_lowercase();
    TRAVERSAL_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
        .then_some(RiskFlag::PathTraversal)
}

fn heavily_percent_encoded(input: &RuleInput<'_>) -> Option<RiskFlag> {
    (input.raw.matches('%').count() > input.config.max_percent_signs)
        .then_some(RiskFlag::HeavilyPercentEncoded)
}

fn non_ascii(input: &RuleInput<'_>) -> Option<RiskFlag> {
    (!input.raw.is_ascii()).then_some(RiskFlag::NonAscii)
}

fn phishing_keywords(input: &RuleInput<'_>) -> Option<RiskFlag> {
    let path = input.url.path().to_lowercase();
    input
        .config
        .phishing_keywords
        .iter()
        .any(|k| input.host.contains(k.as_str()) || path.contains(k.as_str()))
        .then_some(RiskFlag::PhishingKeywords)
}

fn extremely_long_url(input: &RuleInput<'_>) -> Option<RiskFlag> {
    (input.raw.chars().count() > input.config.extreme_url_chars)
        .then_some(RiskFlag::ExtremelyLongUrl)
}

// -- Helpers -----------------------------------------------------------------

/// The port written in the URL, including a scheme's default port.
///
/// `Url::port` hides default ports (`http://host:80`), so when it reports
/// none the raw authority is consulted. A raw port only counts when it
/// matches the scheme default, i.e. when it is the one the parser dropped.
fn explicit_port(url: &Url, raw: &str) -> Option<u16> {
    url.port().or_else(|| {
        authority_port(raw).filter(|port| Some(*port) == url.port_or_known_default())
    })
}

fn authority_port(raw: &str) -> Option<u16> {
    let after_scheme = raw.split_once("://").map_or(raw, |(_, rest)| rest);
    let authority = after_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let host_port = match host_port.rsplit_once(']') {
        Some((_, rest)) => rest,
        None => host_port,
    };
    let (_, port) = host_port.rsplit_once(':')?;
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse().ok()
}

/// Extension of the last path segment, without the dot.
///
/// One trailing `/` is ignored, so `/setup.exe/` still names `setup.exe`.
fn path_extension(path: &str) -> Option<&str> {
    let path = path.strip_suffix('/').unwrap_or(path);
    let file = path.rsplit('/').next()?;
    let (stem, ext) = file.rsplit_once('.')?;
    (!stem.is_empty() && !ext.is_empty()).then_some(ext)
}
