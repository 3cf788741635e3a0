use super::parse_pair;
use crate::transform;
use crate::{Error, Wgs84};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// S-42 (Pulkovo 1942) Gauss-Krüger coordinates, 6° zones.
///
/// The easting `x` carries the zone number in its millions digit, on top
/// of the 500 000 m false easting: zone 3 eastings are around 3 500 000.
/// The northing `y` is the distance from the equator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct S42 {
    x: f64,
    y: f64,
}

impl S42 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> S42 {
        S42 { x, y }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The Gauss-Krüger zone number, i.e. the millions digit of the easting
    #[must_use]
    pub fn zone(&self) -> i32 {
        (self.x / 1_000_000.).trunc() as i32
    }

    #[must_use]
    pub fn wgs84(&self) -> Wgs84 {
        transform::wgs84_from_s42(self)
    }
}

impl Hash for S42 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x + 0.).to_bits().hash(state);
        (self.y + 0.).to_bits().hash(state);
    }
}

impl fmt::Display for S42 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S42: {}m; {}m", self.x, self.y)
    }
}

/// Parse `x; y` or `x y`, with `,` or `.` as decimal separator
impl FromStr for S42 {
    type Err = Error;
    fn from_str(text: &str) -> Result<S42, Error> {
        let (x, y) = parse_pair(text)?;
        Ok(S42::new(x, y))
    }
}

// ----- Tests ---------------------------------------------------------------------
