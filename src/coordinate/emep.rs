use crate::transform;
use crate::Wgs84;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Grid index in the EMEP 50×50 km polar stereographic grid.
///
/// The grid is a polar stereographic projection of a sphere of radius
/// 6370 km, true at 60°N, with the north pole at grid index
/// ([`NORTH_POLE_X`](Self::NORTH_POLE_X), [`NORTH_POLE_Y`](Self::NORTH_POLE_Y))
/// and the y axis parallel to the 32°W meridian.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EmepGrid50x50 {
    x: i32,
    y: i32,
}

impl EmepGrid50x50 {
    /// Grid x index of the north pole
    pub const NORTH_POLE_X: i32 = 8;
    /// Grid y index of the north pole
    pub const NORTH_POLE_Y: i32 = 110;

    #[must_use]
    pub fn new(x: i32, y: i32) -> EmepGrid50x50 {
        EmepGrid50x50 { x, y }
    }

    /// The number of grid cells between the north pole and the equator,
    /// *M = R/d · (1 + sin 60°)*, for R = 6370 km and d = 50 km
    #[must_use]
    pub fn m() -> f64 {
        const GRID_SIZE: f64 = 50.;
        const RADIUS: f64 = 6370.;
        let phi0 = 60_f64.to_radians();
        RADIUS / GRID_SIZE * (1. + phi0.sin())
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// The geographical coordinates of the grid point
    #[must_use]
    pub fn wgs84(&self) -> Wgs84 {
        transform::wgs84_from_emep50x50(self)
    }
}

impl fmt::Display for EmepGrid50x50 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EMEP 50x50: {}; {}", self.x, self.y)
    }
}

// ----- EMEP 0.1° x 0.1° ------------------------------------------------------------

/// Centre of a cell in the EMEP 0.1°×0.1° geographical grid.
///
/// A value is valid only if both latitude and longitude are cell centres,
/// i.e. of the form `floor(v·10)/10 + 0.05`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EmepGrid01x01 {
    latitude: f64,
    longitude: f64,
}

impl EmepGrid01x01 {
    /// Half the cell size, in degrees
    pub const GRID_HALF_SIZE: f64 = 0.05;

    /// A grid coordinate taken as is. Use [`Wgs84::emep01x01`] or the
    /// `From<Wgs84>` conversion to snap an arbitrary point to its cell centre.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> EmepGrid01x01 {
        EmepGrid01x01 {
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// True if both latitude and longitude are cell centres
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_gridable(self.latitude) && is_gridable(self.longitude)
    }

    /// The cell centre as geographical coordinates
    #[must_use]
    pub fn wgs84(&self) -> Wgs84 {
        Wgs84::new(self.latitude, self.longitude)
    }

    #[must_use]
    pub fn left_top(&self) -> Wgs84 {
        self.corner(1., -1.)
    }

    #[must_use]
    pub fn right_top(&self) -> Wgs84 {
        self.corner(1., 1.)
    }

    #[must_use]
    pub fn left_bottom(&self) -> Wgs84 {
        self.corner(-1., -1.)
    }

    #[must_use]
    pub fn right_bottom(&self) -> Wgs84 {
        self.corner(-1., 1.)
    }

    fn corner(&self, north: f64, east: f64) -> Wgs84 {
        Wgs84::new(
            self.latitude + north * Self::GRID_HALF_SIZE,
            self.longitude + east * Self::GRID_HALF_SIZE,
        )
    }
}

/// The centre of the 0.1° cell containing `value`.
///
/// Computed in integral tenths and hundredths, so the centres come out as
/// the nearest double to the decimal value: `gridable(18.15) == 18.15`.
#[must_use]
pub fn gridable(value: f64) -> f64 {
    ((value * 10.).floor() * 10. + 5.) / 100.
}

/// True if `value` is (numerically) a 0.1° cell centre
#[must_use]
pub fn is_gridable(value: f64) -> bool {
    (value - gridable(value)).abs() < 1e-7
}

impl From<Wgs84> for EmepGrid01x01 {
    fn from(wgs84: Wgs84) -> EmepGrid01x01 {
        transform::emep01x01_from_wgs84(&wgs84)
    }
}

impl Hash for EmepGrid01x01 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.latitude + 0.).to_bits().hash(state);
        (self.longitude + 0.).to_bits().hash(state);
    }
}

impl fmt::Display for EmepGrid01x01 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EMEP 0.1°x0.1°: {:.2}; {:.2}{}",
            self.latitude,
            self.longitude,
            if self.is_valid() { "" } else { " (invalid)" }
        )
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn grid_50x50() {
        assert_float_eq!(EmepGrid50x50::m(), 237.731_636_442_137_5, abs <= 1e-9);
        let g = EmepGrid50x50::new(70, 50);
        assert_eq!(g.to_string(), "EMEP 50x50: 70; 50");
        assert_eq!(
            (EmepGrid50x50::NORTH_POLE_X, EmepGrid50x50::NORTH_POLE_Y),
            (8, 110)
        );
    }

    #[test]
    fn gridable_values() {
        assert_eq!(gridable(18.15), 18.15);
        assert_eq!(gridable(18.17), 18.15);
        assert_eq!(gridable(18.1), 18.15);
        assert_eq!(gridable(-0.01), -0.05);
        assert!(is_gridable(49.05));
        assert!(!is_gridable(49.1));
    }

    #[test]
    fn validity() {
        assert!(EmepGrid01x01::new(18.15, 49.05).is_valid());
        assert!(!EmepGrid01x01::new(18.17, 49.05).is_valid());

        let snapped = EmepGrid01x01::from(Wgs84::new(50.0755, 14.4378));
        assert!(snapped.is_valid());
        assert_eq!(snapped.latitude(), 50.05);
        assert_eq!(snapped.longitude(), 14.45);
    }

    #[test]
    fn corners_and_text() {
        let g = EmepGrid01x01::new(50.05, 14.45);
        assert_float_eq!(g.left_top().latitude(), 50.1, abs <= 1e-12);
        assert_float_eq!(g.left_top().longitude(), 14.4, abs <= 1e-12);
        assert_float_eq!(g.right_top().longitude(), 14.5, abs <= 1e-12);
        assert_float_eq!(g.left_bottom().latitude(), 50.0, abs <= 1e-12);
        assert_float_eq!(g.right_bottom().latitude(), 50.0, abs <= 1e-12);
        assert_float_eq!(g.right_bottom().longitude(), 14.5, abs <= 1e-12);

        assert_eq!(g.to_string(), "EMEP 0.1°x0.1°: 50.05; 14.45");
        assert_eq!(
            EmepGrid01x01::new(50.07, 14.45).to_string(),
            "EMEP 0.1°x0.1°: 50.07; 14.45 (invalid)"
        );
    }
}
