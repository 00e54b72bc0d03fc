//! Persisted plugin configuration
//!
//! Flat key=value text, one field per line, order-independent. File I/O
//! lives in the plugin crate; this module only defines the typed fields
//! and the pure parse/serialize steps so the format is testable on host.
//!
//! ```text
//! active=1
//! radius=150.000000
//! lat=47.260000
//! lon=11.340000
//! window_visible=1
//! ```

use core::fmt;

use crate::monitor::{Monitor, RADIUS_DEFAULT_NM, RADIUS_MAX_NM, RADIUS_MIN_NM};

/// Outcome of applying one line of settings text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Key recognized, value applied.
    Applied,
    /// Line was empty, had no `=`, or the key is not one of ours.
    Ignored,
    /// Key recognized but the value did not parse; the field keeps its
    /// current value. Carries the key name for diagnostics.
    BadValue(&'static str),
}

/// Typed persisted configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Monitoring armed at startup
    pub active: bool,
    /// Trigger radius in nautical miles
    pub radius_nm: f64,
    /// Target latitude in degrees
    pub target_lat: f64,
    /// Target longitude in degrees
    pub target_lon: f64,
    /// Configuration panel shown
    pub window_visible: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            active: false,
            radius_nm: RADIUS_DEFAULT_NM,
            target_lat: 0.0,
            target_lon: 0.0,
            window_visible: true,
        }
    }
}

impl Settings {
    /// Capture the persistable state of a monitor plus the panel flag.
    pub fn snapshot(monitor: &Monitor, window_visible: bool) -> Self {
        Self {
            active: monitor.armed(),
            radius_nm: monitor.radius_nm(),
            target_lat: monitor.target().lat_deg,
            target_lon: monitor.target().lon_deg,
            window_visible,
        }
    }

    /// Apply one line of settings text.
    ///
    /// A value that does not parse leaves the field untouched; callers
    /// that want diagnostics inspect the returned [`LineOutcome`].
    /// Radius values are clamped to the valid range on load.
    pub fn apply_line(&mut self, line: &str) -> LineOutcome {
        let line = line.trim();
        let (key, value) = match line.split_once('=') {
            Some(pair) => pair,
            None => return LineOutcome::Ignored,
        };
        let value = value.trim();

        match key.trim() {
            "active" => self.active = value == "1",
            "radius" => match value.parse::<f64>() {
                Ok(v) if v.is_finite() => {
                    self.radius_nm = v.clamp(RADIUS_MIN_NM, RADIUS_MAX_NM)
                }
                _ => return LineOutcome::BadValue("radius"),
            },
            "lat" => match value.parse::<f64>() {
                Ok(v) if v.is_finite() => self.target_lat = v,
                _ => return LineOutcome::BadValue("lat"),
            },
            "lon" => match value.parse::<f64>() {
                Ok(v) if v.is_finite() => self.target_lon = v,
                _ => return LineOutcome::BadValue("lon"),
            },
            "window_visible" => self.window_visible = value == "1",
            _ => return LineOutcome::Ignored,
        }
        LineOutcome::Applied
    }

    /// Parse a whole settings text, fields falling back to defaults.
    pub fn parse(text: &str) -> Self {
        let mut settings = Self::default();
        for line in text.lines() {
            settings.apply_line(line);
        }
        settings
    }

    /// Serialize into the flat key=value format.
    ///
    /// Floats are written with six decimal places so a save/load cycle
    /// round-trips within 1e-6.
    pub fn write_to(&self, out: &mut impl fmt::Write) -> fmt::Result {
        writeln!(out, "active={}", self.active as u8)?;
        writeln!(out, "radius={:.6}", self.radius_nm)?;
        writeln!(out, "lat={:.6}", self.target_lat)?;
        writeln!(out, "lon={:.6}", self.target_lon)?;
        writeln!(out, "window_visible={}", self.window_visible as u8)
    }
}
