//! Polar stereographic projection of the EMEP 50×50 km grid, on a sphere
//! ([EMEP 2012](crate::Bibliography::Eme12)).
//!
//! Grid indices are truncated toward zero, not rounded.
use crate::EmepGrid50x50;
use log::trace;
use std::f64::consts::FRAC_PI_4;

/// Rotation of the grid y axis, i.e. the longitude of the meridian parallel to it
const LON_0: f64 = -32.;

// ----- F O R W A R D -----------------------------------------------------------------

/// WGS84 latitude and longitude (degrees) to EMEP 50×50 grid indices
#[must_use]
pub fn fwd(latitude: f64, longitude: f64) -> (i32, i32) {
    let r = EmepGrid50x50::m() * (FRAC_PI_4 - latitude.to_radians() / 2.).tan();
    let (sin_lon, cos_lon) = (longitude - LON_0).to_radians().sin_cos();
    let x = f64::from(EmepGrid50x50::NORTH_POLE_X) + r * sin_lon;
    let y = f64::from(EmepGrid50x50::NORTH_POLE_Y) - r * cos_lon;
    trace!("EMEP 50x50 fwd: ({x}, {y})");
    (x as i32, y as i32)
}

// ----- I N V E R S E -----------------------------------------------------------------

/// EMEP 50×50 grid indices to WGS84 latitude and longitude, in degrees
#[must_use]
pub fn inv(x: i32, y: i32) -> (f64, f64) {
    let dx = f64::from(x) - f64::from(EmepGrid50x50::NORTH_POLE_X);
    let dy = f64::from(EmepGrid50x50::NORTH_POLE_Y) - f64::from(y);
    let r = dx.hypot(dy);

    let latitude = 90. - 2. * (r / EmepGrid50x50::m()).atan().to_degrees();
    // atan2 keeps the quadrant for cells below the pole row, and is
    // well defined at the pole itself
    let longitude = LON_0 + dx.atan2(dy).to_degrees();
    (latitude, longitude)
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn forward() {
        // Prague
        assert_eq!(fwd(50.0755, 14.4378), (70, 50));
        // Brno
        assert_eq!(fwd(49.1951, 16.6068), (74, 51));
        // On the rotation meridian, x is the pole column
        assert_eq!(fwd(60., -32.), (8, 46));
        // Truncation toward zero on negative indices
        assert_eq!(fwd(-10., 0.), (158, -130));
    }

    #[test]
    fn inverse() {
        let (lat, lon) = inv(70, 50);
        assert_float_eq!(lat, 50.105_857_323, abs <= 1e-8);
        assert_float_eq!(lon, 13.939_190_946, abs <= 1e-8);

        // The pole
        let (lat, lon) = inv(8, 110);
        assert_float_eq!(lat, 90., abs <= 1e-12);
        assert_float_eq!(lon, -32., abs <= 1e-12);

        // Far outside the grid, but no integer overflow
        let (lat, lon) = inv(i32::MIN, i32::MAX);
        assert!(lat > -90. && lat < -89.9);
        assert!(lon.is_finite());
        let (lat, _) = inv(i32::MAX, i32::MIN);
        assert!(lat > -90. && lat < -89.9);
    }
}
