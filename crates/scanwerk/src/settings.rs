// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings file persistence (pretty-printed JSON).

use std::path::Path;

use scanwerk_core::config::ScanwerkConfig;
use scanwerk_core::error::Result;
use tracing::{debug, warn};

/// Conventional file name inside the host's data directory.
pub const CONFIG_FILE: &str = "scanwerk.json";

/// Read and validate settings from `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<ScanwerkConfig> {
    let data = std::fs::read_to_string(path.as_ref())?;
    let config = ScanwerkConfig::from_json(&data)?;
    debug!(path = %path.as_ref().display(), "settings loaded");
    Ok(config)
}

/// Read settings, falling back to defaults when the file is missing,
/// unreadable or invalid.
pub fn load_config_or_default(path: impl AsRef<Path>) -> ScanwerkConfig {
    let path = path.as_ref();
    if !path.exists() {
        return ScanwerkConfig::default();
    }
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "settings unusable, using defaults");
            ScanwerkConfig::default()
        }
    }
}

/// Validate and write settings to `path`.
pub fn save_config(path: impl AsRef<Path>, config: &ScanwerkConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path.as_ref(), json)?;
    debug!(path = %path.as_ref().display(), "settings saved");
    Ok(())
}
