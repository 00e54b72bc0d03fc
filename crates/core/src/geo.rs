//! Great-circle distance calculation
//!
//! Pure functions shared by the monitor and the panel display path.

use libm::{atan2, cos, sin, sqrt};

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;

/// Calculate great-circle distance between two positions using the
/// haversine formula.
///
/// # Arguments
///
/// * `lat1`, `lon1` - First position in degrees
/// * `lat2`, `lon2` - Second position in degrees
///
/// # Returns
///
/// Distance in nautical miles. Coincident points yield exactly 0.
///
/// The `atan2(sqrt(a), sqrt(1-a))` form stays defined when rounding
/// pushes `a` past 1.0 near antipodal points; `a` is clamped so the
/// square root never sees a negative argument.
pub fn distance_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1 * DEG_TO_RAD;
    let lat2_rad = lat2 * DEG_TO_RAD;
    let delta_lat = (lat2 - lat1) * DEG_TO_RAD;
    let delta_lon = (lon2 - lon1) * DEG_TO_RAD;

    let sin_dlat = sin(delta_lat / 2.0);
    let sin_dlon = sin(delta_lon / 2.0);
    let a = sin_dlat * sin_dlat + cos(lat1_rad) * cos(lat2_rad) * sin_dlon * sin_dlon;
    let a = a.min(1.0);
    let c = 2.0 * atan2(sqrt(a), sqrt(1.0 - a));

    EARTH_RADIUS_NM * c
}
