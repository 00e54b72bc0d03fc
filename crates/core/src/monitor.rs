//! Proximity monitor state machine
//!
//! The monitor owns the arming state and the hysteresis logic. Each tick
//! it compares the aircraft position against the target radius and fires
//! the pause command at most once per approach. The pause dispatch and
//! the position lookup are injected via traits so the state machine can
//! be tested on host without a simulator.

use crate::geo::distance_nm;

/// Lower bound of the user-adjustable trigger radius.
pub const RADIUS_MIN_NM: f64 = 10.0;

/// Upper bound of the user-adjustable trigger radius.
pub const RADIUS_MAX_NM: f64 = 500.0;

/// Trigger radius used when no persisted value exists.
pub const RADIUS_DEFAULT_NM: f64 = 150.0;

/// Width of the hysteresis band above the trigger radius.
///
/// The trigger state only resets once the aircraft is farther than
/// `radius + RESET_MARGIN_NM` from the target, so the state cannot
/// oscillate while the aircraft loiters near the boundary.
pub const RESET_MARGIN_NM: f64 = 5.0;

/// Aircraft position in decimal degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPosition {
    /// Latitude in degrees (-90 to +90)
    pub lat_deg: f64,
    /// Longitude in degrees (-180 to +180)
    pub lon_deg: f64,
}

impl GeoPosition {
    /// Create a new position
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

/// Target point the monitor watches, in decimal degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TargetPoint {
    /// Latitude in degrees (-90 to +90)
    pub lat_deg: f64,
    /// Longitude in degrees (-180 to +180)
    pub lon_deg: f64,
}

impl TargetPoint {
    /// Create a new target point
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

/// Source of the current aircraft position.
///
/// Returns `None` until the simulator has published flight data; the
/// monitor treats that as "cannot evaluate yet", not as an error.
pub trait PositionSource {
    /// Current aircraft position, if available.
    fn position(&self) -> Option<GeoPosition>;
}

/// Receiver for the one-shot pause command.
///
/// The host gives no idempotence guarantee for command dispatch, so the
/// monitor invokes this at most once per approach.
pub trait PauseSink {
    /// Dispatch the pause-simulation command. Fire-and-forget.
    fn pause_simulation(&mut self);
}

/// Proximity monitor state.
///
/// Two boolean axes give four reachable states:
///
/// - Disarmed: evaluation has no effect, `triggered` is false
/// - Armed-Watching: inside the radius fires pause once and moves to
///   Armed-Triggered
/// - Armed-Triggered: leaving the reset boundary re-arms for a future
///   approach without re-firing
/// - Deactivation returns to Disarmed from any state
#[derive(Clone, Copy, Debug)]
pub struct Monitor {
    armed: bool,
    triggered: bool,
    target: TargetPoint,
    radius_nm: f64,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Monitor {
    /// Create a disarmed monitor with the default radius and target (0, 0).
    pub fn new() -> Self {
        Self {
            armed: false,
            triggered: false,
            target: TargetPoint::default(),
            radius_nm: RADIUS_DEFAULT_NM,
        }
    }

    /// Rebuild a monitor from persisted state.
    ///
    /// `triggered` always starts false; a fresh session re-evaluates the
    /// approach from scratch.
    pub fn restore(armed: bool, target: TargetPoint, radius_nm: f64) -> Self {
        Self {
            armed,
            triggered: false,
            target,
            radius_nm: radius_nm.clamp(RADIUS_MIN_NM, RADIUS_MAX_NM),
        }
    }

    /// True while monitoring is active.
    pub fn armed(&self) -> bool {
        self.armed
    }

    /// True once the pause has fired for the current approach.
    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// Current target point.
    pub fn target(&self) -> TargetPoint {
        self.target
    }

    /// Current trigger radius in nautical miles.
    pub fn radius_nm(&self) -> f64 {
        self.radius_nm
    }

    /// Set the target point.
    pub fn set_target(&mut self, target: TargetPoint) {
        self.target = target;
    }

    /// Set the trigger radius, clamped to [`RADIUS_MIN_NM`, `RADIUS_MAX_NM`].
    pub fn set_radius_nm(&mut self, radius_nm: f64) {
        self.radius_nm = radius_nm.clamp(RADIUS_MIN_NM, RADIUS_MAX_NM);
    }

    /// Arm the monitor.
    ///
    /// Clears any previous trigger unconditionally, so pressing activate
    /// while already armed re-arms the current approach.
    pub fn activate(&mut self) {
        self.armed = true;
        self.triggered = false;
    }

    /// Disarm the monitor and clear the trigger state.
    pub fn deactivate(&mut self) {
        self.armed = false;
        self.triggered = false;
    }

    /// Great-circle distance from `position` to the target in nautical miles.
    pub fn distance_to(&self, position: GeoPosition) -> f64 {
        distance_nm(
            position.lat_deg,
            position.lon_deg,
            self.target.lat_deg,
            self.target.lon_deg,
        )
    }

    /// One evaluation step, driven by the host at ~1 Hz.
    ///
    /// Disarmed or without a position fix this is a no-op. Otherwise the
    /// trigger check (not yet triggered, distance within radius) and the
    /// reset check (triggered, distance beyond radius plus
    /// [`RESET_MARGIN_NM`]) are applied mutually exclusively: a single
    /// tick either fires, resets, or does nothing.
    pub fn tick(&mut self, position: Option<GeoPosition>, pause: &mut impl PauseSink) {
        if !self.armed {
            return;
        }
        let position = match position {
            Some(p) => p,
            None => return,
        };
        let distance = self.distance_to(position);

        if !self.triggered {
            if distance <= self.radius_nm {
                pause.pause_simulation();
                self.triggered = true;
            }
        } else if distance > self.radius_nm + RESET_MARGIN_NM {
            self.triggered = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingPause {
        count: u32,
    }

    impl CountingPause {
        fn new() -> Self {
            Self { count: 0 }
        }
    }

    impl PauseSink for CountingPause {
        fn pause_simulation(&mut self) {
            self.count += 1;
        }
    }

    // Positions on the equator: one degree of longitude is ~60.0405 NM,
    // so longitude picks the distance from the (0, 0) target.
    fn at_nm_from_origin(approx_nm: f64) -> Option<GeoPosition> {
        Some(GeoPosition::new(0.0, approx_nm / 60.0405))
    }

    fn armed_monitor(radius_nm: f64) -> Monitor {
        let mut monitor = Monitor::new();
        monitor.set_target(TargetPoint::new(0.0, 0.0));
        monitor.set_radius_nm(radius_nm);
        monitor.activate();
        monitor
    }

    #[test]
    fn test_default_state() {
        let monitor = Monitor::new();
        assert!(!monitor.armed());
        assert!(!monitor.triggered());
        assert!((monitor.radius_nm() - RADIUS_DEFAULT_NM).abs() < 1e-9);
    }

    #[test]
    fn test_radius_clamped() {
        let mut monitor = Monitor::new();
        monitor.set_radius_nm(2.0);
        assert!((monitor.radius_nm() - RADIUS_MIN_NM).abs() < 1e-9);
        monitor.set_radius_nm(1200.0);
        assert!((monitor.radius_nm() - RADIUS_MAX_NM).abs() < 1e-9);
    }

    #[test]
    fn test_approach_fires_once() {
        // Scenario A: outside the radius nothing happens, entering fires
        let mut monitor = armed_monitor(100.0);
        let mut pause = CountingPause::new();

        monitor.tick(at_nm_from_origin(150.0), &mut pause);
        assert!(!monitor.triggered());
        assert_eq!(pause.count, 0);

        monitor.tick(at_nm_from_origin(50.0), &mut pause);
        assert!(monitor.triggered());
        assert_eq!(pause.count, 1);
    }

    #[test]
    fn test_no_refire_inside_reset_band() {
        // Scenario B: 90 NM is inside the 105 NM reset boundary
        let mut monitor = armed_monitor(100.0);
        let mut pause = CountingPause::new();

        monitor.tick(at_nm_from_origin(50.0), &mut pause);
        assert_eq!(pause.count, 1);

        monitor.tick(at_nm_from_origin(90.0), &mut pause);
        assert!(monitor.triggered());
        assert_eq!(pause.count, 1);

        monitor.tick(at_nm_from_origin(50.0), &mut pause);
        assert_eq!(pause.count, 1);
    }

    #[test]
    fn test_reset_beyond_band_then_refire() {
        let mut monitor = armed_monitor(100.0);
        let mut pause = CountingPause::new();

        monitor.tick(at_nm_from_origin(50.0), &mut pause);
        assert!(monitor.triggered());

        // 110 NM is beyond radius + margin, trigger resets without firing
        monitor.tick(at_nm_from_origin(110.0), &mut pause);
        assert!(!monitor.triggered());
        assert!(monitor.armed());
        assert_eq!(pause.count, 1);

        // A second approach fires again
        monitor.tick(at_nm_from_origin(40.0), &mut pause);
        assert!(monitor.triggered());
        assert_eq!(pause.count, 2);
    }

    #[test]
    fn test_reset_band_edges() {
        let mut monitor = armed_monitor(100.0);
        let mut pause = CountingPause::new();

        monitor.tick(at_nm_from_origin(99.0), &mut pause);
        assert!(monitor.triggered());

        // Just inside the 105 NM reset boundary: trigger holds
        monitor.tick(at_nm_from_origin(104.5), &mut pause);
        assert!(monitor.triggered());
        assert_eq!(pause.count, 1);

        // Just beyond it: trigger resets
        monitor.tick(at_nm_from_origin(105.5), &mut pause);
        assert!(!monitor.triggered());
        assert_eq!(pause.count, 1);
    }

    #[test]
    fn test_disarmed_never_fires() {
        // Scenario C
        let mut monitor = Monitor::new();
        monitor.set_target(TargetPoint::new(0.0, 0.0));
        monitor.set_radius_nm(100.0);
        let mut pause = CountingPause::new();

        monitor.tick(at_nm_from_origin(0.0), &mut pause);
        assert!(!monitor.triggered());
        assert_eq!(pause.count, 0);
    }

    #[test]
    fn test_missing_position_is_noop() {
        let mut monitor = armed_monitor(100.0);
        let mut pause = CountingPause::new();

        monitor.tick(None, &mut pause);
        assert!(monitor.armed());
        assert!(!monitor.triggered());
        assert_eq!(pause.count, 0);

        // State survives the gap and fires when data returns
        monitor.tick(at_nm_from_origin(50.0), &mut pause);
        assert_eq!(pause.count, 1);
    }

    #[test]
    fn test_activate_clears_trigger() {
        let mut monitor = armed_monitor(100.0);
        let mut pause = CountingPause::new();

        monitor.tick(at_nm_from_origin(50.0), &mut pause);
        assert!(monitor.triggered());

        // Re-activating while armed re-arms the current approach
        monitor.activate();
        assert!(!monitor.triggered());
        monitor.tick(at_nm_from_origin(50.0), &mut pause);
        assert_eq!(pause.count, 2);
    }

    #[test]
    fn test_deactivate_clears_trigger() {
        let mut monitor = armed_monitor(100.0);
        let mut pause = CountingPause::new();

        monitor.tick(at_nm_from_origin(50.0), &mut pause);
        monitor.deactivate();
        assert!(!monitor.armed());
        assert!(!monitor.triggered());

        monitor.tick(at_nm_from_origin(50.0), &mut pause);
        assert_eq!(pause.count, 1);
    }

    #[test]
    fn test_restore_never_starts_triggered() {
        let monitor = Monitor::restore(true, TargetPoint::new(10.0, 20.0), 80.0);
        assert!(monitor.armed());
        assert!(!monitor.triggered());
        assert!((monitor.radius_nm() - 80.0).abs() < 1e-9);
    }
}
