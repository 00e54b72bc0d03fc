//! Configuration panel model
//!
//! Separates typed configuration values from their editable textual
//! representation: free-text input is parsed only when the user commits
//! an action, and text is re-synchronized from typed values on load.
//! The GUI toolkit itself stays behind the plugin crate's `PanelUi`
//! boundary; this module is pure state.

use core::fmt::Write;

use heapless::String;

use crate::monitor::{Monitor, TargetPoint};
use crate::settings::Settings;

/// Capacity of a coordinate input field, in bytes.
pub const FIELD_CAPACITY: usize = 32;

/// Bounded-length text field for a numeric input.
///
/// Editing only touches the text; [`InputField::commit`] parses it, with
/// invalid input committing as 0.0.
#[derive(Clone, Debug)]
pub struct InputField {
    text: String<FIELD_CAPACITY>,
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField {
    /// Create a field showing "0.0".
    pub fn new() -> Self {
        let mut field = Self {
            text: String::new(),
        };
        field.set_text("0.0");
        field
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, truncating at the field capacity.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        for ch in text.chars() {
            if self.text.push(ch).is_err() {
                break;
            }
        }
    }

    /// Re-sync the text from a typed value, six decimal places.
    pub fn set_value(&mut self, value: f64) {
        self.text.clear();
        let _ = write!(self.text, "{:.6}", value);
    }

    /// Parse the current text. Invalid input commits as 0.0.
    pub fn commit(&self) -> f64 {
        self.text.trim().parse().unwrap_or(0.0)
    }
}

/// User actions the panel can commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    /// Commit target fields and radius, arm the monitor.
    Activate,
    /// Disarm the monitor.
    Deactivate,
    /// Slider moved; applies the radius live without persisting.
    RadiusChanged,
}

/// Editable state behind the configuration panel.
#[derive(Clone, Debug)]
pub struct PanelModel {
    /// Target latitude input
    pub lat: InputField,
    /// Target longitude input
    pub lon: InputField,
    /// Radius slider value in nautical miles
    pub radius_nm: f32,
}

impl Default for PanelModel {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl PanelModel {
    /// Build the panel from loaded settings, syncing text from typed values.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut lat = InputField::new();
        let mut lon = InputField::new();
        lat.set_value(settings.target_lat);
        lon.set_value(settings.target_lon);
        Self {
            lat,
            lon,
            radius_nm: settings.radius_nm as f32,
        }
    }

    /// Apply a committed user action to the monitor.
    ///
    /// Returns true when the change must be persisted.
    pub fn apply(&mut self, action: PanelAction, monitor: &mut Monitor) -> bool {
        match action {
            PanelAction::Activate => {
                monitor.set_target(TargetPoint::new(self.lat.commit(), self.lon.commit()));
                monitor.set_radius_nm(f64::from(self.radius_nm));
                monitor.activate();
                true
            }
            PanelAction::Deactivate => {
                monitor.deactivate();
                true
            }
            PanelAction::RadiusChanged => {
                monitor.set_radius_nm(f64::from(self.radius_nm));
                false
            }
        }
    }
}
