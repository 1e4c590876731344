// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the scan result screen.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Severity drives the icon and colour the presentation layer picks.

use crate::error::ScanwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Scanning again may well work.
    Transient,
    /// User must do something (rescan, fix a setting).
    ActionRequired,
    /// Retrying will not help.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether offering "Try again" makes sense.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `ScanwerkError` into a `HumanError` anyone can understand.
pub fn humanize_error(err: &ScanwerkError) -> HumanError {
    match err {
        ScanwerkError::EmptyPayload => HumanError {
            message: "We couldn't find anything in that code.".into(),
            suggestion: "Hold the camera steady over the code, or paste the text again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        ScanwerkError::UnknownKind(kind) => HumanError {
            message: "A saved scan has a type this version doesn't know.".into(),
            suggestion: format!("Update the app to see this scan properly. (Type: {kind})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        ScanwerkError::InvalidConfig(detail) => HumanError {
            message: "A link-safety setting doesn't look right.".into(),
            suggestion: format!("Reset link safety to the default settings. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        ScanwerkError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to read its settings.".into(),
                    suggestion: "Reinstalling the app will restore the default settings.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing the app's settings.".into(),
                    suggestion: "Try again. If this keeps happening, your device's storage may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        ScanwerkError::Serialization(_) => HumanError {
            message: "The saved settings are damaged.".into(),
            suggestion: "The default settings will be used until you change them again.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}
