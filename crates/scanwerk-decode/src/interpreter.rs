// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scan interpreter — classifies a decoded payload into a semantic kind.
//
// Classification is first-match-wins in a fixed order, because several
// predicates can match the same payload (an email address also contains a
// dot and no spaces, so it would otherwise be a bare-domain URL):
//
//   wifi: → BEGIN:VCARD → mailto:/email → tel:/phone → sms:/smsto: → geo:
//   → URL normalization → text

use scanwerk_core::error::{Result, ScanwerkError};
use scanwerk_core::host::is_dotted_quad;
use scanwerk_core::types::{ParsedScan, ScanKind};
use tracing::debug;
use url::Url;

/// Digits-plus-`+` count accepted by the bare phone number heuristic.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=16;

/// Classify a decoded payload. Never fails; unrecognised input is `Text`.
///
/// The payload is trimmed of surrounding whitespace first and the trimmed
/// value becomes [`ParsedScan::raw`]. Callers should reject blank payloads
/// before calling (see [`try_parse`]); a blank payload classifies as empty
/// `Text`.
pub fn parse(input: &str) -> ParsedScan {
    let raw = input.trim();
    let scan = classify(raw);
    debug!(kind = %scan.kind(), len = raw.len(), "classified scan payload");
    scan
}

/// Like [`parse`], but rejects payloads that are empty after trimming.
pub fn try_parse(input: &str) -> Result<ParsedScan> {
    if input.trim().is_empty() {
        return Err(ScanwerkError::EmptyPayload);
    }
    Ok(parse(input))
}

fn classify(raw: &str) -> ParsedScan {
    if has_prefix_ci(raw, "wifi:") {
        return ParsedScan::classified(raw, ScanKind::Wifi);
    }
    if has_prefix_ci(raw, "begin:vcard") {
        return ParsedScan::classified(raw, ScanKind::Vcard);
    }
    if has_prefix_ci(raw, "mailto:") || looks_like_email(raw) {
        return ParsedScan::classified(raw, ScanKind::Email);
    }
    if has_prefix_ci(raw, "tel:") || looks_like_phone(raw) {
        return ParsedScan::classified(raw, ScanKind::Phone);
    }
    if has_prefix_ci(raw, "sms:") || has_prefix_ci(raw, "smsto:") {
        return ParsedScan::classified(raw, ScanKind::Sms);
    }
    if has_prefix_ci(raw, "geo:") {
        return ParsedScan::classified(raw, ScanKind::Geo);
    }
    match normalize_url(raw) {
        Some(url) => ParsedScan::url(raw, url),
        None => ParsedScan::classified(raw, ScanKind::Text),
    }
}

/// Turn a URL-like payload into a fully-qualified URL.
///
/// Absolute URLs are returned as parsed. Scheme-less payloads that start
/// with `www.` or contain a dot are treated as `https://` links, so a bare
/// `example.com/path` is a URL. Anything containing whitespace is not.
pub fn normalize_url(raw: &str) -> Option<Url> {
    if raw.is_empty() || has_whitespace(raw) {
        return None;
    }
    if let Ok(url) = Url::parse(raw) {
        if !url.scheme().is_empty() {
            return Some(url);
        }
    }
    if has_prefix_ci(raw, "www.") || raw.contains('.') {
        return Url::parse(&format!("https://{raw}")).ok();
    }
    None
}

/// ASCII case-insensitive prefix test that never splits a UTF-8 sequence.
pub(crate) fn has_prefix_ci(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// The remainder of `s` after a case-insensitive `prefix`.
pub(crate) fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if has_prefix_ci(s, prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

fn has_whitespace(s: &str) -> bool {
    s.chars().any(char::is_whitespace)
}

fn looks_like_email(s: &str) -> bool {
    s.contains('@') && s.contains('.') && !has_whitespace(s)
}

/// Characters that may appear in a printed phone number.
pub(crate) fn is_dial_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.')
}

/// A bare phone number: only dial characters, 7 to 16 digits and `+` signs.
///
/// Payloads with letters are left for URL normalization, so
/// `http://192.168.1.1/admin` stays a link even though it holds 8 digits.
/// A bare IPv4 address is a link too; `555.123.4567` is not an address.
fn looks_like_phone(s: &str) -> bool {
    if s.is_empty() || !s.chars().all(is_dial_char) || is_dotted_quad(s) {
        return false;
    }
    let digits = s.chars().filter(|c| c.is_ascii_digit() || *c == '+').count();
    PHONE_DIGITS.contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(input: &str) -> ScanKind {
        parse(input).kind()
    }

    #[test]
    fn prefixes_are_case_insensitive() {
        assert_eq!(kind("WIFI:T:WPA;S:Home;P:pw;;"), ScanKind::Wifi);
        assert_eq!(kind("wifi:S:Home;;"), ScanKind::Wifi);
        assert_eq!(kind("BEGIN:VCARD\nVERSION:3.0\nFN:Ada\nEND:VCARD"), ScanKind::Vcard);
        assert_eq!(kind("MAILTO:ada@example.com"), ScanKind::Email);
        assert_eq!(kind("TEL:+441234567890"), ScanKind::Phone);
        assert_eq!(kind("SMSTO:+441234567890:hi"), ScanKind::Sms);
        assert_eq!(kind("sms:+441234567890"), ScanKind::Sms);
        assert_eq!(kind("GEO:51.5,-0.12"), ScanKind::Geo);
    }

    #[test]
    fn input_is_trimmed() {
        let scan = parse("  \n https://example.com \r\n");
        assert_eq!(scan.raw(), "https://example.com");
        assert_eq!(scan.kind(), ScanKind::Url);
    }

    #[test]
    fn parse_is_idempotent_on_raw() {
        for input in ["  hello world  ", "\texample.com\n", "WIFI:S:x;;", "  "] {
            let once = parse(input);
            assert_eq!(parse(once.raw()).raw(), once.raw());
        }
    }

    #[test]
    fn bare_email_heuristic() {
        assert_eq!(kind("ada@example.com"), ScanKind::Email);
        // Email wins over the bare-domain URL rule.
        assert_eq!(kind("user@evil.example.com/login"), ScanKind::Email);
    }

    #[test]
    fn bare_phone_heuristic() {
        assert_eq!(kind("+44 20 7946 0958"), ScanKind::Text);
        assert_eq!(kind("+44(20)7946-0958"), ScanKind::Phone);
        assert_eq!(kind("5551234"), ScanKind::Phone);
        // Too short / too long.
        assert_eq!(kind("123456"), ScanKind::Text);
        assert_eq!(kind("12345678901234567"), ScanKind::Text);
    }

    #[test]
    fn url_with_many_digits_is_not_a_phone() {
        let scan = parse("http://192.168.1.1/admin");
        assert_eq!(scan.kind(), ScanKind::Url);
        let url = scan.normalized_url().expect("url present");
        assert_eq!(url.host_str(), Some("192.168.1.1"));
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn bare_ipv4_address_is_a_url() {
        for s in ["192.168.1.1", "10.0.0.1", "255.255.255.255"] {
            let scan = parse(s);
            assert_eq!(scan.kind(), ScanKind::Url, "{s}");
            assert_eq!(scan.normalized_url().unwrap().host_str(), Some(s));
        }
        assert_eq!(kind("555.123.4567"), ScanKind::Phone);
        assert_eq!(kind("1.2.3.4.5.6.7"), ScanKind::Phone);
    }

    #[test]
    fn host_and_port_without_scheme_parses_as_its_own_scheme() {
        // `www.example.com:` is a syntactically valid scheme, so the
        // absolute parse wins before the `www.` rule is tried.
        let scan = parse("www.example.com:8080/login");
        assert_eq!(scan.kind(), ScanKind::Url);
        let url = scan.normalized_url().unwrap();
        assert_eq!(url.scheme(), "www.example.com");
        assert_eq!(url.host_str(), None);
        assert_eq!(url.port(), None);
    }

    #[test]
    fn bare_domain_with_path_is_a_url() {
        let scan = parse("example.com/path");
        assert_eq!(scan.kind(), ScanKind::Url);
        assert_eq!(scan.normalized_url().unwrap().as_str(), "https://example.com/path");
    }

    #[test]
    fn www_prefix_gets_https() {
        let scan = parse("WWW.Example.com/a?b=c");
        assert_eq!(scan.kind(), ScanKind::Url);
        let url = scan.normalized_url().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("www.example.com"));
        assert_eq!(url.query(), Some("b=c"));
    }

    #[test]
    fn any_dotted_token_without_whitespace_is_a_url() {
        for s in ["a.b", "example.org", "docs.rs/url", "foo.bar.baz/x-y_z", "shop.example/item#top"] {
            assert_eq!(kind(s), ScanKind::Url, "{s}");
        }
    }

    #[test]
    fn whitespace_blocks_url_email_and_phone() {
        for s in [
            "just some plain text",
            "visit example.com today",
            "ada@example.com and bob@example.com",
            "555 123 4567",
            "https://example.com/a b",
        ] {
            let k = kind(s);
            assert_ne!(k, ScanKind::Url, "{s}");
            assert_ne!(k, ScanKind::Email, "{s}");
            assert_ne!(k, ScanKind::Phone, "{s}");
        }
    }

    #[test]
    fn plain_text_has_no_url() {
        let scan = parse("just some plain text");
        assert_eq!(scan.kind(), ScanKind::Text);
        assert!(scan.normalized_url().is_none());
    }

    #[test]
    fn single_word_is_text() {
        assert_eq!(kind("hello"), ScanKind::Text);
        assert_eq!(kind("12:30"), ScanKind::Text);
    }

    #[test]
    fn blank_input_is_rejected_by_try_parse() {
        assert!(matches!(try_parse(" \n\t"), Err(ScanwerkError::EmptyPayload)));
        assert_eq!(try_parse(" a.b ").unwrap().raw(), "a.b");
        // parse itself stays total.
        assert_eq!(parse("").kind(), ScanKind::Text);
    }

    #[test]
    fn prefix_check_respects_char_boundaries() {
        assert!(!has_prefix_ci("wï", "wifi:"));
        assert_eq!(kind("ünïcödé"), ScanKind::Text);
    }

    #[test]
    fn normalize_keeps_absolute_urls() {
        let url = normalize_url("ftp://files.example.com/a.txt").unwrap();
        assert_eq!(url.scheme(), "ftp");
        assert!(normalize_url("no-dots-here").is_none());
        assert!(normalize_url("").is_none());
    }
}
