// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tracking-parameter removal for the "copy sanitized link" action.

use scanwerk_core::config::SanitizerConfig;
use tracing::debug;
use url::{Url, form_urlencoded};

/// Strips analytics and ad-click parameters from URLs.
///
/// Remaining parameters keep their order and their original encoding, and
/// every other URL component is left alone. A URL with nothing to strip is
/// returned as-is.
#[derive(Debug, Clone, Default)]
pub struct UrlSanitizer {
    config: SanitizerConfig,
}

impl UrlSanitizer {
    pub fn new(config: SanitizerConfig) -> Self {
        Self { config }
    }

    /// Remove tracking parameters from `url`.
    pub fn sanitize(&self, url: &Url) -> Url {
        self.strip(url).unwrap_or_else(|| url.clone())
    }

    /// Remove tracking parameters from a URL string.
    ///
    /// Input that does not parse as a URL, or has nothing to strip, comes
    /// back byte-for-byte.
    pub fn sanitize_str(&self, input: &str) -> String {
        Url::parse(input)
            .ok()
            .and_then(|url| self.strip(&url))
            .map_or_else(|| input.to_owned(), |url| url.to_string())
    }

    /// The cleaned URL, or `None` when no parameter was removed.
    fn strip(&self, url: &Url) -> Option<Url> {
        let query = url.query()?;

        let mut removed = 0usize;
        let kept: Vec<&str> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| {
                let tracking = self.config.is_tracking_param(&param_name(pair));
                if tracking {
                    removed += 1;
                }
                !tracking
            })
            .collect();

        if removed == 0 {
            return None;
        }

        let mut cleaned = url.clone();
        if kept.is_empty() {
            cleaned.set_query(None);
        } else {
            cleaned.set_query(Some(&kept.join("&")));
        }
        debug!(removed, kept = kept.len(), "stripped tracking parameters");
        Some(cleaned)
    }
}

/// Sanitize with the default tracking-parameter list.
pub fn sanitize(url: &Url) -> Url {
    UrlSanitizer::default().sanitize(url)
}

/// Percent-decoded name of a `name=value` query pair.
fn param_name(pair: &str) -> String {
    let name = pair.split_once('=').map_or(pair, |(name, _)| name);
    form_urlencoded::parse(name.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(s: &str) -> String {
        sanitize(&Url::parse(s).unwrap()).to_string()
    }

    #[test]
    fn removes_exactly_the_tracking_parameters() {
        let url = Url::parse("https://example.com/?a=1&utm_source=x&b=2&fbclid=y").unwrap();
        assert_eq!(sanitize(&url).query(), Some("a=1&b=2"));
    }

    #[test]
    fn drops_query_entirely_when_nothing_remains() {
        assert_eq!(
            clean("https://example.com/page?utm_source=news&utm_medium=email&gclid=abc"),
            "https://example.com/page"
        );
    }

    #[test]
    fn keeps_fragment_port_and_path() {
        assert_eq!(
            clean("https://example.com:8443/a/b?msclkid=1&id=7#section"),
            "https://example.com:8443/a/b?id=7#section"
        );
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(
            clean("https://example.com/?UTM_Campaign=x&IGSHID=y&Mc_Cid=z&keep=1"),
            "https://example.com/?keep=1"
        );
    }

    #[test]
    fn retained_parameters_keep_their_encoding() {
        assert_eq!(
            clean("https://example.com/?q=a%20b+c&dclid=1&r=%2Fhome"),
            "https://example.com/?q=a%20b+c&r=%2Fhome"
        );
    }

    #[test]
    fn percent_encoded_tracking_name_is_recognised() {
        assert_eq!(clean("https://example.com/?utm%5Fsource=x&a=1"), "https://example.com/?a=1");
    }

    #[test]
    fn similar_names_are_kept() {
        let url = Url::parse("https://example.com/?utm=1&fbclid2=2&my_utm_source=3").unwrap();
        assert_eq!(sanitize(&url), url);
    }

    #[test]
    fn url_without_query_is_unchanged() {
        let url = Url::parse("https://example.com/path#frag").unwrap();
        assert_eq!(sanitize(&url), url);
    }

    #[test]
    fn unparsable_input_fails_open() {
        let sanitizer = UrlSanitizer::default();
        assert_eq!(sanitizer.sanitize_str("not a url?utm_source=x"), "not a url?utm_source=x");
        assert_eq!(sanitizer.sanitize_str("HTTPS://Example.com"), "HTTPS://Example.com");
        assert_eq!(
            sanitizer.sanitize_str("https://example.com/?utm_source=x&id=1"),
            "https://example.com/?id=1"
        );
    }

    #[test]
    fn custom_tracking_list() {
        let sanitizer = UrlSanitizer::new(SanitizerConfig {
            tracking_params: vec!["ref".into()],
            tracking_prefixes: vec![],
        });
        let url = Url::parse("https://example.com/?ref=home&utm_source=x").unwrap();
        assert_eq!(sanitizer.sanitize(&url).query(), Some("utm_source=x"));
    }
}
