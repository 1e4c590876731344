// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Payload fingerprinting — SHA-256 digests for scan history records.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of `data` and return it as a lowercase hex string.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}

/// Fingerprint a trimmed scan payload.
///
/// The history store keys repeat scans of the same code on this digest, so
/// the raw payload never needs to be compared or indexed directly.
pub fn hash_payload(raw: &str) -> String {
    hash_bytes(raw.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// SHA-256 of the empty byte slice (well-known constant).
    const EMPTY_SHA256: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn hash_empty_input() {
        assert_eq!(hash_bytes(b""), EMPTY_SHA256);
    }

    #[test]
    fn hash_known_value() {
        // SHA-256("hello") — verified against coreutils sha256sum.
        let expected = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";
        assert_eq!(hash_payload("hello"), expected);
    }

    #[test]
    fn distinct_payloads_differ() {
        assert_ne!(hash_payload("https://a.example"), hash_payload("https://b.example"));
        assert_eq!(hash_payload("WIFI:S:x;;").len(), 64);
    }
}
