//! Simulator runtime boundary
//!
//! The plugin reaches the hosting simulator only through
//! [`SimulatorHost`]. A real binding wraps the SDK's dataref reads and
//! command dispatch; tests use [`MockHost`]. All calls are synchronous:
//! the host invokes the plugin on a single thread, so implementations
//! need no internal locking.

use autotod_core::monitor::{GeoPosition, PositionSource};

/// Interface to the hosting simulator runtime.
///
/// Position lookup comes from the core [`PositionSource`] seam; this
/// trait adds the command dispatch side.
pub trait SimulatorHost: PositionSource {
    /// Dispatch the pause-simulation command. Fire-and-forget; the host
    /// gives no idempotence guarantee, the monitor ensures at-most-once.
    fn issue_pause(&mut self);
}

/// Scripted host for tests with a controllable position and a pause
/// counter. Always available, like the core trait mocks.
#[derive(Debug, Default)]
pub struct MockHost {
    position: Option<GeoPosition>,
    pause_count: u32,
}

impl MockHost {
    /// Creates a host with no position fix yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a position fix.
    pub fn set_position(&mut self, lat_deg: f64, lon_deg: f64) {
        self.position = Some(GeoPosition::new(lat_deg, lon_deg));
    }

    /// Withdraw the position fix, as before simulation data is ready.
    pub fn clear_position(&mut self) {
        self.position = None;
    }

    /// Number of pause commands dispatched so far.
    pub fn pause_count(&self) -> u32 {
        self.pause_count
    }
}

impl PositionSource for MockHost {
    fn position(&self) -> Option<GeoPosition> {
        self.position
    }
}

impl SimulatorHost for MockHost {
    fn issue_pause(&mut self) {
        self.pause_count += 1;
    }
}
