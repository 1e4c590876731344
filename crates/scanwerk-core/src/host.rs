// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host-shape predicates shared by classification and risk analysis.

/// Four dot-separated decimal segments, each 0–255.
///
/// The interpreter uses this to keep bare IPv4 payloads out of the phone
/// heuristic; the risk analyzer uses it for the IP-host rule.
pub fn is_dotted_quad(host: &str) -> bool {
    let segments: Vec<&str> = host.split('.').collect();
    segments.len() == 4
        && segments.iter().all(|seg| {
            !seg.is_empty() && seg.bytes().all(|b| b.is_ascii_digit()) && seg.parse::<u8>().is_ok()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_quad_detection() {
        assert!(is_dotted_quad("10.0.0.255"));
        assert!(is_dotted_quad("192.168.1.1"));
        assert!(!is_dotted_quad("10.0.0.256"));
        assert!(!is_dotted_quad("10.0.0"));
        assert!(!is_dotted_quad("10.0.0.+1"));
        assert!(!is_dotted_quad("a.b.c.d"));
        assert!(!is_dotted_quad("555.123.4567"));
        assert!(!is_dotted_quad("1.2.3.4.5"));
    }
}
