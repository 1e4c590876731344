// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Action fields for email, phone, SMS and geo payloads.
//
// The result screen needs the address to compose a mail, the number to dial
// or text, and coordinates to open a map. Extraction is best effort: a
// payload that cannot supply a usable target yields `None` and the screen
// falls back to copy/share.

use scanwerk_core::types::{
    EmailTarget, GeoPoint, ParsedScan, PayloadFields, PhoneTarget, ScanKind, SmsTarget,
};
use url::form_urlencoded;

use crate::interpreter::{is_dial_char, strip_prefix_ci};

/// Extract action fields for the scan's kind.
///
/// Only email, phone, SMS and geo payloads carry fields; Wi-Fi payloads go
/// through [`crate::wifi::parse_wifi`] instead.
pub fn extract_fields(scan: &ParsedScan) -> Option<PayloadFields> {
    let raw = scan.raw();
    match scan.kind() {
        ScanKind::Email => email_target(raw).map(PayloadFields::Email),
        ScanKind::Phone => phone_target(raw).map(PayloadFields::Phone),
        ScanKind::Sms => sms_target(raw).map(PayloadFields::Sms),
        ScanKind::Geo => geo_point(raw).map(PayloadFields::Geo),
        ScanKind::Url | ScanKind::Wifi | ScanKind::Vcard | ScanKind::Text => None,
    }
}

/// `mailto:addr?subject=..&body=..` or a bare address.
pub fn email_target(raw: &str) -> Option<EmailTarget> {
    let rest = strip_prefix_ci(raw, "mailto:").unwrap_or(raw);
    let (address, query) = match rest.split_once('?') {
        Some((address, query)) => (address, Some(query)),
        None => (rest, None),
    };
    if address.is_empty() {
        return None;
    }

    let mut subject = None;
    let mut body = None;
    if let Some(query) = query {
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if key.eq_ignore_ascii_case("subject") {
                subject = Some(value.into_owned());
            } else if key.eq_ignore_ascii_case("body") {
                body = Some(value.into_owned());
            }
        }
    }

    Some(EmailTarget {
        address: address.to_owned(),
        subject,
        body,
    })
}

/// `tel:` URI or bare printed number, reduced to dialable form.
pub fn phone_target(raw: &str) -> Option<PhoneTarget> {
    let rest = strip_prefix_ci(raw, "tel:").unwrap_or(raw);
    let number = dialable(rest)?;
    Some(PhoneTarget { number })
}

/// `sms:number?body=..`, `sms:number:body` or `SMSTO:number:body`.
pub fn sms_target(raw: &str) -> Option<SmsTarget> {
    let rest = strip_prefix_ci(raw, "smsto:").or_else(|| strip_prefix_ci(raw, "sms:"))?;

    let (number, body) = if let Some((number, query)) = rest.split_once('?') {
        let body = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key.eq_ignore_ascii_case("body"))
            .map(|(_, value)| value.into_owned());
        (number, body)
    } else if let Some((number, body)) = rest.split_once(':') {
        (number, Some(body.to_owned()))
    } else {
        (rest, None)
    };

    Some(SmsTarget {
        number: dialable(number)?,
        body: body.filter(|b| !b.is_empty()),
    })
}

/// `geo:lat,lon[,alt][;params][?query]` with range-checked coordinates.
pub fn geo_point(raw: &str) -> Option<GeoPoint> {
    let rest = strip_prefix_ci(raw, "geo:")?;
    let coords = rest.split([';', '?']).next().unwrap_or_default();

    let mut parts = coords.split(',').map(|p| p.trim().parse::<f64>());
    let latitude = parts.next()?.ok()?;
    let longitude = parts.next()?.ok()?;
    let altitude = match parts.next() {
        Some(alt) => Some(alt.ok()?),
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return None;
    }

    Some(GeoPoint {
        latitude,
        longitude,
        altitude,
    })
}

/// Keep digits and a leading `+`; `None` when no digits remain or the input
/// holds characters that cannot appear in a printed number.
fn dialable(s: &str) -> Option<String> {
    let s = s.trim();
    if !s.chars().all(|c| is_dial_char(c) || c == ' ') {
        return None;
    }
    let mut number: String = s.chars().filter(char::is_ascii_digit).collect();
    if number.is_empty() {
        return None;
    }
    if s.starts_with('+') {
        number.insert(0, '+');
    }
    Some(number)
}
