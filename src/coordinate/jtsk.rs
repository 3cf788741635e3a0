use super::parse_pair;
use crate::transform;
use crate::{Error, Wgs84};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// S-JTSK in the Krovak projection, EPSG:2065 axis convention: positive
/// `x` southwards, positive `y` westwards, so for the Czech Republic
/// `x > y > 0`.
///
/// No range checks are made on construction: the "x > y > 0" ordering is
/// violated by real data near the edges of the projection area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Jtsk2065 {
    x: f64,
    y: f64,
}

impl Jtsk2065 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Jtsk2065 {
        Jtsk2065 { x, y }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn wgs84(&self) -> Wgs84 {
        transform::wgs84_from_jtsk2065(self)
    }

    /// The same point in the EPSG:5514 axis convention
    #[must_use]
    pub fn jtsk5514(&self) -> Jtsk5514 {
        transform::jtsk5514_from_jtsk2065(self)
    }
}

/// S-JTSK in the Krovak projection, EPSG:5514 axis convention, i.e. the
/// "GIS friendly" reflection of EPSG:2065: `x = -y(2065)`, `y = -x(2065)`.
/// For the Czech Republic both coordinates are negative.
///
/// As for [`Jtsk2065`], construction is unchecked.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Jtsk5514 {
    x: f64,
    y: f64,
}

impl Jtsk5514 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Jtsk5514 {
        Jtsk5514 { x, y }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn wgs84(&self) -> Wgs84 {
        transform::wgs84_from_jtsk5514(self)
    }

    /// The same point in the EPSG:2065 axis convention
    #[must_use]
    pub fn jtsk2065(&self) -> Jtsk2065 {
        transform::jtsk2065_from_jtsk5514(self)
    }
}

// ----- Trait implementations -------------------------------------------------------

impl From<Jtsk2065> for Jtsk5514 {
    fn from(jtsk: Jtsk2065) -> Jtsk5514 {
        jtsk.jtsk5514()
    }
}

impl From<Jtsk5514> for Jtsk2065 {
    fn from(jtsk: Jtsk5514) -> Jtsk2065 {
        jtsk.jtsk2065()
    }
}

// `+ 0.` folds -0 into 0, which compare equal
impl Hash for Jtsk2065 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x + 0.).to_bits().hash(state);
        (self.y + 0.).to_bits().hash(state);
    }
}

impl Hash for Jtsk5514 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x + 0.).to_bits().hash(state);
        (self.y + 0.).to_bits().hash(state);
    }
}

/// Written as surveyors write it: `y` before `x`
impl fmt::Display for Jtsk2065 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JTSK2065: {}m; {}m", self.y, self.x)
    }
}

impl fmt::Display for Jtsk5514 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JTSK5514: {}m; {}m", self.x, self.y)
    }
}

/// Parse `x; y` or `x y`, with `,` or `.` as decimal separator
impl FromStr for Jtsk2065 {
    type Err = Error;
    fn from_str(text: &str) -> Result<Jtsk2065, Error> {
        let (x, y) = parse_pair(text)?;
        Ok(Jtsk2065::new(x, y))
    }
}

/// Parse `x; y` or `x y`, with `,` or `.` as decimal separator
impl FromStr for Jtsk5514 {
    type Err = Error;
    fn from_str(text: &str) -> Result<Jtsk5514, Error> {
        let (x, y) = parse_pair(text)?;
        Ok(Jtsk5514::new(x, y))
    }
}

// ----- Tests ---------------------------------------------------------------------
