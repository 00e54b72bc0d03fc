//! Plugin context and host entry points
//!
//! [`Plugin`] replaces the ambient globals a simulator plugin usually
//! accretes: it is constructed explicitly with the settings path, owns
//! the monitor and the panel model, and exposes the two host-driven
//! entry points `on_tick` and `on_render`. The host adapter decides the
//! callback shapes; this type only requires being called on one thread.

use std::path::PathBuf;

use autotod_core::monitor::{Monitor, PauseSink, TargetPoint, RADIUS_MAX_NM, RADIUS_MIN_NM};
use autotod_core::panel::{PanelAction, PanelModel};
use autotod_core::settings::Settings;
use log::{info, warn};

use crate::host::SimulatorHost;
use crate::settings_file;
use crate::ui::PanelUi;

/// Evaluation interval the host scheduler is asked for, in seconds.
pub const TICK_INTERVAL_S: f32 = 1.0;

/// Title of the configuration panel window.
pub const WINDOW_TITLE: &str = "AutoTOD";

/// Forwards the monitor's one-shot pause to the host command dispatch.
struct PauseDispatch<'a, H: SimulatorHost>(&'a mut H);

impl<H: SimulatorHost> PauseSink for PauseDispatch<'_, H> {
    fn pause_simulation(&mut self) {
        self.0.issue_pause();
    }
}

/// Process-wide plugin state with an explicit lifecycle.
pub struct Plugin {
    monitor: Monitor,
    panel: PanelModel,
    window_visible: bool,
    settings_path: PathBuf,
}

impl Plugin {
    /// Create the plugin context, loading persisted settings.
    ///
    /// A missing or partly unreadable settings file degrades to defaults
    /// per field; construction never fails.
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        let settings_path = settings_path.into();
        let settings = settings_file::load(&settings_path);
        let monitor = Monitor::restore(
            settings.active,
            TargetPoint::new(settings.target_lat, settings.target_lon),
            settings.radius_nm,
        );
        let panel = PanelModel::from_settings(&settings);
        Self {
            monitor,
            panel,
            window_visible: settings.window_visible,
            settings_path,
        }
    }

    /// The proximity monitor, for status display.
    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    /// Whether the configuration panel is shown.
    pub fn window_visible(&self) -> bool {
        self.window_visible
    }

    /// Periodic evaluation, registered with the host scheduler at
    /// [`TICK_INTERVAL_S`].
    pub fn on_tick(&mut self, _dt_seconds: f32, host: &mut impl SimulatorHost) {
        let position = host.position();
        let was_triggered = self.monitor.triggered();
        self.monitor.tick(position, &mut PauseDispatch(host));

        if self.monitor.triggered() && !was_triggered {
            if let Some(pos) = position {
                info!(
                    "pause triggered {:.1} NM from target",
                    self.monitor.distance_to(pos)
                );
            }
        }
    }

    /// Draw the configuration panel and apply committed user actions.
    ///
    /// Called from the host's draw callback every frame; does nothing
    /// while the window is hidden.
    pub fn on_render(&mut self, ui: &mut impl PanelUi, host: &impl SimulatorHost) {
        if !self.window_visible {
            return;
        }

        let mut open = true;
        if ui.begin_window(WINDOW_TITLE, &mut open) {
            let armed = self.monitor.armed();
            ui.status(
                if armed { "Status: ACTIVE" } else { "Status: standby" },
                armed,
            );
            ui.separator();

            ui.text_field("Lat", &mut self.panel.lat);
            ui.text_field("Lon", &mut self.panel.lon);
            if ui.slider(
                "Radius (NM)",
                &mut self.panel.radius_nm,
                RADIUS_MIN_NM as f32,
                RADIUS_MAX_NM as f32,
            ) {
                self.panel.apply(PanelAction::RadiusChanged, &mut self.monitor);
            }

            if ui.button("Set & Activate") {
                self.activate();
            }
            if ui.button("Deactivate") {
                self.deactivate();
            }

            if let Some(pos) = host.position() {
                ui.separator();
                ui.label(&format!(
                    "Position: {:.4}, {:.4}",
                    pos.lat_deg, pos.lon_deg
                ));
                ui.status(
                    &format!("Distance: {:.1} NM", self.monitor.distance_to(pos)),
                    self.monitor.armed(),
                );
            }
        }
        ui.end_window();

        if !open {
            self.window_visible = false;
            self.save_settings();
        }
    }

    /// Commit the panel fields, arm the monitor, and persist.
    pub fn activate(&mut self) {
        if self.panel.apply(PanelAction::Activate, &mut self.monitor) {
            self.save_settings();
        }
        let target = self.monitor.target();
        info!(
            "armed for {:.4}, {:.4} (radius {:.0} NM)",
            target.lat_deg,
            target.lon_deg,
            self.monitor.radius_nm()
        );
    }

    /// Disarm the monitor and persist.
    pub fn deactivate(&mut self) {
        if self.panel.apply(PanelAction::Deactivate, &mut self.monitor) {
            self.save_settings();
        }
        info!("disarmed");
    }

    /// Menu handler: toggle panel visibility and persist the flag.
    pub fn toggle_window(&mut self) {
        self.window_visible = !self.window_visible;
        self.save_settings();
    }

    fn save_settings(&self) {
        let snapshot = Settings::snapshot(&self.monitor, self.window_visible);
        if let Err(err) = settings_file::save(&self.settings_path, &snapshot) {
            warn!(
                "could not save settings to {}: {err}",
                self.settings_path.display()
            );
        }
    }
}
