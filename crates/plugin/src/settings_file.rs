//! Settings file persistence
//!
//! Best-effort flat-file I/O around the pure format in
//! `autotod_core::settings`. Nothing here aborts the plugin: a missing
//! file yields defaults and a malformed field keeps its default while
//! the remaining fields still load.

use std::fs;
use std::io;
use std::path::Path;

use autotod_core::settings::{LineOutcome, Settings};
use log::{info, warn};

use crate::error::PluginError;

/// Load settings from `path`.
pub fn load(path: &Path) -> Settings {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!("no settings file at {}, using defaults", path.display());
            return Settings::default();
        }
        Err(err) => {
            warn!("could not read settings from {}: {err}", path.display());
            return Settings::default();
        }
    };

    let mut settings = Settings::default();
    for line in text.lines() {
        if let LineOutcome::BadValue(key) = settings.apply_line(line) {
            info!("settings: unparsable value for '{key}', keeping default");
        }
    }
    info!("settings loaded from {}", path.display());
    settings
}

/// Save settings to `path`, floats at six decimal places.
pub fn save(path: &Path, settings: &Settings) -> Result<(), PluginError> {
    let mut text = String::new();
    settings.write_to(&mut text)?;
    fs::write(path, text)?;
    info!("settings saved to {}", path.display());
    Ok(())
}
