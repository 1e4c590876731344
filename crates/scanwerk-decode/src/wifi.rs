// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Wi-Fi network descriptor decoding (`WIFI:T:WPA;S:MySSID;P:secret;H:true;;`).
//
// Fields are `KEY:VALUE` pairs separated by `;`. Inside a value a backslash
// escapes the next character, so `\;` is a literal semicolon and `\\` a
// literal backslash. Splitting is a single pass with an escape flag; no
// regular expressions are involved.

use scanwerk_core::types::WifiCredential;
use tracing::debug;

use crate::interpreter::strip_prefix_ci;

/// Characters escaped when encoding a descriptor.
const SPECIAL_CHARS: &[char] = &['\\', ';', ',', ':', '"'];

/// Decode a `WIFI:` descriptor.
///
/// Returns `None` when the payload is not a Wi-Fi descriptor or carries no
/// usable SSID; callers treat that as "cannot offer a join action".
pub fn parse_wifi(raw: &str) -> Option<WifiCredential> {
    let body = strip_prefix_ci(raw.trim(), "wifi:")?;

    let mut ssid: Option<String> = None;
    let mut security = String::new();
    let mut passphrase: Option<String> = None;
    let mut hidden = false;

    for segment in split_segments(body) {
        let Some((key, value)) = segment.split_once(':') else {
            continue;
        };
        let value = unescape(value);
        match key.to_ascii_uppercase().as_str() {
            "S" => ssid = Some(value),
            "T" => security = value.to_ascii_uppercase(),
            "P" => passphrase = Some(value),
            "H" => hidden = value.eq_ignore_ascii_case("true") || value == "1",
            _ => {}
        }
    }

    let ssid = ssid.filter(|s| !s.is_empty())?;
    let is_open = security == "NOPASS" || passphrase.as_deref().is_none_or(str::is_empty);
    let is_wep = security == "WEP";
    let passphrase = if is_open { None } else { passphrase };

    debug!(
        security = %security,
        is_open,
        hidden,
        "decoded Wi-Fi descriptor"
    );

    Some(WifiCredential {
        ssid,
        passphrase,
        is_wep,
        is_open,
        hidden,
    })
}

/// Encode credentials back into a `WIFI:` descriptor, escaping special
/// characters, for "share network" actions.
pub fn encode_wifi(credential: &WifiCredential) -> String {
    let security = if credential.is_open {
        "nopass"
    } else if credential.is_wep {
        "WEP"
    } else {
        "WPA"
    };

    let mut out = format!("WIFI:T:{security};S:{};", escape(&credential.ssid));
    if let Some(passphrase) = credential.passphrase.as_deref().filter(|_| !credential.is_open) {
        out.push_str(&format!("P:{};", escape(passphrase)));
    }
    if credential.hidden {
        out.push_str("H:true;");
    }
    out.push(';');
    out
}

/// Split on unescaped `;`, keeping escape sequences intact for [`unescape`].
///
/// A trailing segment is dropped only when it is empty.
fn split_segments(body: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut escaping = false;

    for c in body.chars() {
        if escaping {
            current.push(c);
            escaping = false;
        } else if c == '\\' {
            current.push(c);
            escaping = true;
        } else if c == ';' {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Reverse backslash escaping. A dangling final backslash is kept.
fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut escaping = false;

    for c in value.chars() {
        if escaping {
            out.push(c);
            escaping = false;
        } else if c == '\\' {
            escaping = true;
        } else {
            out.push(c);
        }
    }

    if escaping {
        out.push('\\');
    }
    out
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if SPECIAL_CHARS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
